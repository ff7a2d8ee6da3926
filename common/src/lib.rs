//! Core of the retro site panel: a typing terminal and a snake game, plus
//! the configuration, logging and timer plumbing they share.

pub mod config;
pub mod id_generator;
pub mod logger;
pub mod scheduler;
pub mod session_rng;
pub mod site_config;
pub mod snake;
pub mod terminal;
mod defaults;

pub use site_config::{CONFIG_FILE_NAME, SiteConfig};

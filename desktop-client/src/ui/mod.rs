mod app;
mod colors;
mod snake_view;
mod terminal_view;

pub use app::SiteApp;

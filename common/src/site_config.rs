use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::snake::SnakeSettings;
use crate::terminal::TerminalSettings;

pub const CONFIG_FILE_NAME: &str = "retro_site_config.yaml";

/// Everything the site panel reads at startup.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct SiteConfig {
    pub terminal: TerminalSettings,
    pub snake: SnakeSettings,
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<(), String> {
        self.terminal.validate().map_err(|e| format!("terminal: {}", e))?;
        self.snake.validate().map_err(|e| format!("snake: {}", e))?;
        Ok(())
    }
}

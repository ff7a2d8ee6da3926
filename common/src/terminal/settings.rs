use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::config::check_range;
use crate::defaults::{
    DEFAULT_MARKER, DEFAULT_REVEAL_DELAY_MS, DEFAULT_SCROLLBACK, default_commands, default_intro,
};

/// One command definition. Either field may be missing in the source;
/// such items never reach the command table.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct CommandItem {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

impl CommandItem {
    pub fn new(command: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            response: Some(response.into()),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TerminalSettings {
    pub marker: String,
    pub reveal_delay_ms: u64,
    pub scrollback: usize,
    #[serde(default)]
    pub intro: Vec<String>,
    #[serde(default)]
    pub commands: Vec<CommandItem>,
}

impl TerminalSettings {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

impl Validate for TerminalSettings {
    fn validate(&self) -> Result<(), String> {
        if self.marker.trim().is_empty() {
            return Err("marker must not be empty".to_string());
        }
        check_range("reveal_delay_ms", self.reveal_delay_ms, 1, 2000)?;
        check_range("scrollback", self.scrollback, 10, 10_000)?;
        Ok(())
    }
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            scrollback: DEFAULT_SCROLLBACK,
            intro: default_intro(),
            commands: default_commands(),
        }
    }
}

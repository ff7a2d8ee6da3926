use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{Validate, check_range};
use crate::defaults::{DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS};

pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 50;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeSettings {
    pub grid_size: usize,
    pub tick_interval_ms: u64,
}

impl SnakeSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("grid_size", self.grid_size, MIN_GRID_SIZE, MAX_GRID_SIZE)?;
        check_range("tick_interval_ms", self.tick_interval_ms, 50, 1000)?;
        Ok(())
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

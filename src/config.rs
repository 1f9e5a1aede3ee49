//! Game configuration and validation

use crate::board::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::error::ConfigError;

/// Settings for a new game. Board size is the only rule knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { size: DEFAULT_SIZE }
    }
}

impl GameConfig {
    /// Build a validated configuration.
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        let config = GameConfig { size };
        config.validate()?;
        Ok(config)
    }

    /// Size must be odd and within `MIN_SIZE..=MAX_SIZE`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::TooSmall {
                size: self.size,
                min: MIN_SIZE,
            });
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::TooLarge {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        if self.size % 2 == 0 {
            return Err(ConfigError::EvenSize(self.size));
        }
        Ok(())
    }
}

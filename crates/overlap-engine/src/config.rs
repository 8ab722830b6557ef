//! Group finder configuration.
//!
//! Stored as TOML:
//!
//! ```toml
//! min_slot_duration = 60   # minutes
//! min_group_size = 2
//! ```
//!
//! Missing keys fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinderConfig {
    /// Shortest free window, in minutes, worth meeting in.
    #[serde(default = "default_min_slot_duration")]
    pub min_slot_duration: i64,
    /// Fewest participants that make a group.
    #[serde(default = "default_min_group_size")]
    pub min_group_size: usize,
}

fn default_min_slot_duration() -> i64 {
    60
}

fn default_min_group_size() -> usize {
    2
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            min_slot_duration: default_min_slot_duration(),
            min_group_size: default_min_group_size(),
        }
    }
}

impl FinderConfig {
    pub fn new(min_slot_duration: i64, min_group_size: usize) -> Self {
        Self {
            min_slot_duration,
            min_group_size,
        }
    }

    /// Reject a non-positive duration or a zero group size.
    pub fn validate(&self) -> Result<()> {
        if self.min_slot_duration <= 0 {
            return Err(OverlapError::InvalidConfiguration(format!(
                "min_slot_duration must be positive, got {}",
                self.min_slot_duration
            )));
        }
        if self.min_group_size < 1 {
            return Err(OverlapError::InvalidConfiguration(
                "min_group_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FinderConfig =
            toml::from_str(content).map_err(|e| OverlapError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| OverlapError::Config(e.to_string()))
    }
}

//! Configuration for a MARS match.
//!
//! This module defines the parameters fixed when a simulation is created. It provides:
//! 1. **Defaults:** Classic tournament-sized core and cycle budget.
//! 2. **Structure:** A flat [`MarsConfig`] deserializable from JSON with per-field defaults.
//! 3. **Validation:** Rejection of geometries the simulator cannot run.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Number of cells in core.
    pub const CORE_SIZE: usize = 8000;

    /// Cells per placement block; one warrior is placed per block.
    pub const BLOCK_SIZE: usize = 100;

    /// Tick budget for one match.
    pub const DURATION: u64 = 80_000;
}

/// Parameters of one simulation.
///
/// # Example
///
/// ```
/// use mars_core::config::MarsConfig;
///
/// let config = MarsConfig::from_json(r#"{ "core_size": 256, "block_size": 64 }"#).unwrap();
/// assert_eq!(config.core_size, 256);
/// assert_eq!(config.block_size, 64);
/// assert_eq!(config.duration, 80_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MarsConfig {
    /// Number of cells in core.
    #[serde(default = "MarsConfig::default_core_size")]
    pub core_size: usize,

    /// Placement granularity; `core_size / block_size` whole blocks exist.
    #[serde(default = "MarsConfig::default_block_size")]
    pub block_size: usize,

    /// Maximum number of ticks before the match ends.
    #[serde(default = "MarsConfig::default_duration")]
    pub duration: u64,
}

impl MarsConfig {
    /// Creates a configuration from explicit values.
    pub const fn new(core_size: usize, block_size: usize, duration: u64) -> Self {
        Self {
            core_size,
            block_size,
            duration,
        }
    }

    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the geometry is usable.
    ///
    /// # Returns
    ///
    /// `Ok(())` when core and block sizes are non-zero and a block fits in core.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.core_size == 0 {
            return Err(ConfigError::ZeroCoreSize);
        }
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if self.block_size > self.core_size {
            return Err(ConfigError::BlockLargerThanCore {
                block_size: self.block_size,
                core_size: self.core_size,
            });
        }
        Ok(())
    }

    /// Number of whole placement blocks.
    pub const fn block_count(&self) -> usize {
        self.core_size / self.block_size
    }

    const fn default_core_size() -> usize {
        defaults::CORE_SIZE
    }

    const fn default_block_size() -> usize {
        defaults::BLOCK_SIZE
    }

    const fn default_duration() -> u64 {
        defaults::DURATION
    }
}

impl Default for MarsConfig {
    fn default() -> Self {
        Self::new(defaults::CORE_SIZE, defaults::BLOCK_SIZE, defaults::DURATION)
    }
}

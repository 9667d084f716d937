//! Work-factor configuration.

use serde::Deserialize;

use crate::error::HashError;

/// Lowest cost accepted by [`crate::make`].
pub const MIN_COST: u32 = 4;
/// Highest cost accepted by [`crate::make`].
pub const MAX_COST: u32 = 31;
/// Cost applied when no explicit value is configured.
pub const DEFAULT_COST: u32 = 10;

/// Named options for hash creation. Currently only the bcrypt cost
/// (work factor); missing values resolve to [`DEFAULT_COST`] before any
/// validation takes place.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    #[serde(default = "default_cost")]
    pub cost: u32,
}

fn default_cost() -> u32 {
    DEFAULT_COST
}

impl Default for HashConfig {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl HashConfig {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Checks the cost against the documented contract range [4, 31].
    pub fn validate(&self) -> Result<(), HashError> {
        if self.cost < MIN_COST || self.cost > MAX_COST {
            return Err(HashError::InvalidConfiguration(self.cost));
        }
        Ok(())
    }

    /// Loads the configuration from an optional `config/default` file with
    /// `PASSHASH`-prefixed environment variables layered on top
    /// (`PASSHASH_COST=12`). No range check is applied here; a bad deployed
    /// value fails on the first `make` call instead.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("PASSHASH"))
            .build()?;

        config.try_deserialize()
    }
}

//! Simulation configuration
//!
//! Passed explicitly to the resolver; there is no global instance.
//!
//! ```toml
//! trials = 100000
//! batches = 32
//! parallel = true
//! seed = 42
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of Monte Carlo trials
pub const DEFAULT_TRIALS: u32 = 100_000;

/// Default number of independent trial batches
pub const DEFAULT_BATCHES: u32 = 32;

/// Tunables for the Monte Carlo branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of trials to run
    #[serde(default = "default_trials")]
    pub trials: u32,
    /// Number of independent batches the trials are split into
    #[serde(default = "default_batches")]
    pub batches: u32,
    /// Run batches on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Seed for reproducible runs (None = entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: DEFAULT_TRIALS,
            batches: DEFAULT_BATCHES,
            parallel: true,
            seed: None,
        }
    }
}

fn default_trials() -> u32 {
    DEFAULT_TRIALS
}
fn default_batches() -> u32 {
    DEFAULT_BATCHES
}
fn default_parallel() -> bool {
    true
}

impl SimulationConfig {
    /// Load and validate a config from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        let config: SimulationConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config from a TOML string
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig =
            toml::from_str(toml).map_err(|e| ConfigError::Parse { error: e, path: None })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a distribution
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Validation(
                "trials must be at least 1".to_string(),
            ));
        }
        if self.batches == 0 {
            return Err(ConfigError::Validation(
                "batches must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder: set the trial count
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Builder: fix the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set the batch count
    pub fn with_batches(mut self, batches: u32) -> Self {
        self.batches = batches;
        self
    }

    /// Builder: run every batch on the calling thread
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

//! Generator configuration
//!
//! A config names an algorithm and its seed words, optionally with a number
//! of leading draws to discard. It is the runtime-typed entry point; the
//! typed engines never fail.
//!
//! ```json
//! { "algorithm": "jsf64", "seed": [1, 2, 3], "skip": 1000 }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{Algorithm, AnyGenerator, BitGenerator, SeedLengthError};

/// Errors raised while validating or loading a [`GeneratorConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    SeedLength(#[from] SeedLengthError),

    #[error("Invalid config JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}

/// Which engine to build and how to seed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub algorithm: Algorithm,

    /// Seed words; length must match [`Algorithm::seed_words`].
    pub seed: Vec<u64>,

    /// 64-bit draws discarded after seeding.
    #[serde(default)]
    pub skip: u64,
}

impl GeneratorConfig {
    pub fn new(algorithm: Algorithm, seed: Vec<u64>) -> Self {
        Self {
            algorithm,
            seed,
            skip: 0,
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let expected = self.algorithm.seed_words();
        if self.seed.len() != expected {
            return Err(SeedLengthError {
                algorithm: self.algorithm,
                expected,
                actual: self.seed.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Seed the configured engine and discard `skip` draws.
    pub fn build(&self) -> Result<AnyGenerator, ConfigError> {
        let mut rng = AnyGenerator::seeded(self.algorithm, &self.seed)?;
        if self.skip > 0 {
            log::debug!("{}: skipping {} draws", self.algorithm, self.skip);
            rng.skip(self.skip);
        }
        Ok(rng)
    }
}

//! Algorithm registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A seed slice whose length does not match the engine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{algorithm} expects {expected} seed words, got {actual}")]
pub struct SeedLengthError {
    pub algorithm: Algorithm,
    pub expected: usize,
    pub actual: usize,
}

/// The engines this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Gjrand,
    Jsf64,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Gjrand, Algorithm::Jsf64];

    /// Lowercase identifier used in configs and checkpoints.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Gjrand => "gjrand",
            Algorithm::Jsf64 => "jsf64",
        }
    }

    /// Name reported to Python as `bit_generator`.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Gjrand => "GJrand",
            Algorithm::Jsf64 => "JSF64",
        }
    }

    /// Number of seed words the engine consumes.
    pub fn seed_words(self) -> usize {
        match self {
            Algorithm::Gjrand => 2,
            Algorithm::Jsf64 => 3,
        }
    }

    /// Copy a runtime-length seed into the fixed-size array the engine takes.
    ///
    /// # Errors
    /// Returns [`SeedLengthError`] unless `seed` holds exactly
    /// [`seed_words`](Self::seed_words) words and `N` matches that count.
    pub fn seed_array<const N: usize>(self, seed: &[u64]) -> Result<[u64; N], SeedLengthError> {
        let error = SeedLengthError {
            algorithm: self,
            expected: self.seed_words(),
            actual: seed.len(),
        };
        if seed.len() != self.seed_words() {
            return Err(error);
        }
        seed.try_into().map_err(|_| error)
    }

    /// Discarded transitions run after placing the seed.
    pub fn warmup_steps(self) -> usize {
        match self {
            Algorithm::Gjrand => 14,
            Algorithm::Jsf64 => 20,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s) || a.display_name() == s)
            .ok_or_else(|| format!("unknown algorithm '{}' (expected gjrand or jsf64)", s))
    }
}

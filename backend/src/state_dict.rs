//! Flat state layout used by numpy-style bit generators
//!
//! Python callers see engine state as
//! `{"bit_generator": name, "state": {"s": [..]}, "has_uint32": int, "uinteger": int}`.
//! [`StateDict`] holds those fields after extraction and checks them before
//! they become an [`EngineState`], so the validation runs without a Python
//! interpreter.

use thiserror::Error;

use crate::rng::{Algorithm, EngineState};

/// Errors raised while reading a [`StateDict`].
#[derive(Debug, Error, PartialEq)]
pub enum StateDictError {
    #[error("state must be for a {expected} PRNG, got {found}")]
    WrongGenerator { expected: &'static str, found: String },

    #[error("state['s'] must hold 4 words, got {0}")]
    WordCount(usize),

    #[error("uinteger must fit in 32 bits, got {0}")]
    CachedValueRange(u64),
}

/// Fields of a Python state dict, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDict {
    pub bit_generator: String,
    pub s: Vec<u64>,
    pub has_uint32: i64,
    pub uinteger: u64,
}

impl StateDict {
    /// Flatten a snapshot taken from an `algorithm` engine.
    pub fn from_engine_state(algorithm: Algorithm, state: &EngineState) -> Self {
        Self {
            bit_generator: algorithm.display_name().to_string(),
            s: state.words.to_vec(),
            has_uint32: state.has_cached as i64,
            uinteger: state.cached_value as u64,
        }
    }

    /// Check the fields belong to `algorithm` and rebuild the snapshot.
    ///
    /// Any non-zero `has_uint32` counts as a pending half.
    pub fn into_engine_state(self, algorithm: Algorithm) -> Result<EngineState, StateDictError> {
        if self.bit_generator != algorithm.display_name() {
            return Err(StateDictError::WrongGenerator {
                expected: algorithm.display_name(),
                found: self.bit_generator,
            });
        }
        let words: [u64; 4] = self
            .s
            .try_into()
            .map_err(|s: Vec<u64>| StateDictError::WordCount(s.len()))?;
        let cached_value = u32::try_from(self.uinteger)
            .map_err(|_| StateDictError::CachedValueRange(self.uinteger))?;

        Ok(EngineState {
            words,
            has_cached: self.has_uint32 != 0,
            cached_value,
        })
    }
}

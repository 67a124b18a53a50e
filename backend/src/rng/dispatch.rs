//! Runtime selection between engines
//!
//! The typed engines are the primary API. `AnyGenerator` exists for callers
//! that only learn the algorithm at runtime (configs, checkpoint files, the
//! Python bindings), which is also the only place a seed of the wrong length
//! can show up.

use super::{Algorithm, BitGenerator, Engine, EngineState, Gjrand, Jsf64, SeedLengthError};

/// Either engine, behind the common interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGenerator {
    Gjrand(Gjrand),
    Jsf64(Jsf64),
}

impl AnyGenerator {
    /// Seed the selected engine from a runtime-length seed slice.
    ///
    /// # Errors
    /// Returns [`SeedLengthError`] if `seed` does not hold exactly
    /// [`Algorithm::seed_words`] words.
    ///
    /// # Example
    /// ```
    /// use bitgenerators_core::{Algorithm, AnyGenerator, BitGenerator};
    ///
    /// let mut rng = AnyGenerator::seeded(Algorithm::Gjrand, &[1, 2]).unwrap();
    /// assert_eq!(rng.next_uint64(), 0x1BBA_D0FE_0243_C889);
    /// assert!(AnyGenerator::seeded(Algorithm::Jsf64, &[1, 2]).is_err());
    /// ```
    pub fn seeded(algorithm: Algorithm, seed: &[u64]) -> Result<Self, SeedLengthError> {
        Ok(match algorithm {
            Algorithm::Gjrand => AnyGenerator::Gjrand(Gjrand::new(algorithm.seed_array(seed)?)),
            Algorithm::Jsf64 => AnyGenerator::Jsf64(Jsf64::new(algorithm.seed_array(seed)?)),
        })
    }

    /// Rebuild an engine from an untagged snapshot.
    pub fn from_engine_state(algorithm: Algorithm, state: EngineState) -> Self {
        match algorithm {
            Algorithm::Gjrand => AnyGenerator::Gjrand(Gjrand::from_state(state.into())),
            Algorithm::Jsf64 => AnyGenerator::Jsf64(Jsf64::from_state(state.into())),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyGenerator::Gjrand(_) => Algorithm::Gjrand,
            AnyGenerator::Jsf64(_) => Algorithm::Jsf64,
        }
    }

    /// Untagged snapshot; pair it with [`algorithm`](Self::algorithm).
    pub fn engine_state(&self) -> EngineState {
        match self {
            AnyGenerator::Gjrand(rng) => rng.get_state().into(),
            AnyGenerator::Jsf64(rng) => rng.get_state().into(),
        }
    }

    /// Install an untagged snapshot into whichever engine is active.
    pub fn set_engine_state(&mut self, state: EngineState) {
        match self {
            AnyGenerator::Gjrand(rng) => rng.set_state(state.into()),
            AnyGenerator::Jsf64(rng) => rng.set_state(state.into()),
        }
    }
}

impl From<Gjrand> for AnyGenerator {
    fn from(rng: Gjrand) -> Self {
        AnyGenerator::Gjrand(rng)
    }
}

impl From<Jsf64> for AnyGenerator {
    fn from(rng: Jsf64) -> Self {
        AnyGenerator::Jsf64(rng)
    }
}

impl BitGenerator for AnyGenerator {
    fn next_uint64(&mut self) -> u64 {
        match self {
            AnyGenerator::Gjrand(rng) => rng.next_uint64(),
            AnyGenerator::Jsf64(rng) => rng.next_uint64(),
        }
    }

    fn next_uint32(&mut self) -> u32 {
        match self {
            AnyGenerator::Gjrand(rng) => rng.next_uint32(),
            AnyGenerator::Jsf64(rng) => rng.next_uint32(),
        }
    }

    fn next_raw(&mut self) -> u64 {
        match self {
            AnyGenerator::Gjrand(rng) => rng.next_raw(),
            AnyGenerator::Jsf64(rng) => rng.next_raw(),
        }
    }

    fn next_double(&mut self) -> f64 {
        match self {
            AnyGenerator::Gjrand(rng) => rng.next_double(),
            AnyGenerator::Jsf64(rng) => rng.next_double(),
        }
    }
}

//! Bit generators
//!
//! Two four-word, 64-bit engines sharing one calling contract:
//!
//! - **gjrand**: add/rotate/xor mixer with a Weyl counter in the last word
//! - **jsf64**: Bob Jenkins' small fast generator, 64-bit variant
//!
//! CRITICAL: Output is bit-exact. Same seed → same sequence, on every platform.

mod algorithm;
mod dispatch;
mod gjrand;
mod jsf64;
mod packing;

pub use algorithm::{Algorithm, SeedLengthError};
pub use dispatch::AnyGenerator;
pub use gjrand::{Gjrand, GjrandState};
pub use jsf64::{Jsf64, Jsf64State};
pub use packing::HalfWordCache;

use serde::{Deserialize, Serialize};

/// Circular left rotation over the full 64-bit width.
#[inline(always)]
pub(crate) fn rotl(value: u64, rot: u32) -> u64 {
    value.rotate_left(rot)
}

/// Uniform calling contract shared by every engine.
///
/// This is the only abstraction boundary: callers are polymorphic over these
/// operations, never over the shape of an engine's internal state.
pub trait BitGenerator {
    /// Advance by exactly one transition and return the output word.
    fn next_uint64(&mut self) -> u64;

    /// Next 32-bit value under the half-word packing policy.
    ///
    /// Performs at most one transition: every other call is served from the
    /// cached high half of the previous draw.
    fn next_uint32(&mut self) -> u32;

    /// Raw transition output. Identical to [`next_uint64`](Self::next_uint64)
    /// for the engines in this crate.
    fn next_raw(&mut self) -> u64 {
        self.next_uint64()
    }

    /// Uniform double in `[0.0, 1.0)` built from the top 53 bits of one draw.
    ///
    /// # Example
    /// ```
    /// use bitgenerators_core::{BitGenerator, Gjrand};
    ///
    /// let mut rng = Gjrand::new([1, 2]);
    /// let x = rng.next_double();
    /// assert!((0.0..1.0).contains(&x));
    /// ```
    fn next_double(&mut self) -> f64 {
        (self.next_uint64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Fill `dest` with consecutive 64-bit draws.
    fn fill_uint64(&mut self, dest: &mut [u64]) {
        for slot in dest.iter_mut() {
            *slot = self.next_uint64();
        }
    }

    /// Fill `dest` with consecutive 32-bit draws (packing policy applies).
    fn fill_uint32(&mut self, dest: &mut [u32]) {
        for slot in dest.iter_mut() {
            *slot = self.next_uint32();
        }
    }

    /// Discard `n` 64-bit draws.
    fn skip(&mut self, n: u64) {
        for _ in 0..n {
            self.next_uint64();
        }
    }
}

/// Persisted state layout shared by both engines.
///
/// `cached_value` is meaningless while `has_cached` is false but is still
/// captured and restored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineState {
    pub words: [u64; 4],
    pub has_cached: bool,
    pub cached_value: u32,
}

impl EngineState {
    /// State with no pending half-word.
    pub fn from_words(words: [u64; 4]) -> Self {
        Self {
            words,
            has_cached: false,
            cached_value: 0,
        }
    }
}

/// A concrete engine: seeding plus typed checkpoint/restore.
///
/// `Seed` and `State` differ per engine, so handing a jsf64 seed or snapshot
/// to gjrand does not type-check.
pub trait Engine: BitGenerator + Sized {
    /// Seed words, as a fixed-size array of the variant's length.
    type Seed: Copy;

    /// Variant-tagged snapshot.
    type State: Copy + From<EngineState> + Into<EngineState>;

    /// Registry entry for this engine.
    const ALGORITHM: Algorithm;

    /// Place the seed words, run the warm-up, clear the half-word cache.
    fn seeded(seed: Self::Seed) -> Self;

    /// Re-seed in place. Any pending cached half is dropped.
    fn reseed(&mut self, seed: Self::Seed) {
        *self = Self::seeded(seed);
    }

    /// Exact snapshot of the four words and the half-word cache.
    fn get_state(&self) -> Self::State;

    /// Install a snapshot verbatim. Every bit pattern is accepted.
    fn set_state(&mut self, state: Self::State);

    /// Build an engine directly from a snapshot.
    fn from_state(state: Self::State) -> Self;
}

//! jsf64 bit generator
//!
//! Bob Jenkins' "small fast" generator in its 64-bit form (rotations 7, 13
//! and 37). `s0` is seeded with the fixed constant 0xF1EA5EED and the three
//! seed words fill `s1..s3`; twenty transitions are discarded.
//!
//! The all-zero state maps to itself. Seeding never reaches it because
//! `s0` starts non-zero and the transition is a bijection.

use log::debug;
use rand_core::{impls, le, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{rotl, Algorithm, BitGenerator, Engine, EngineState, HalfWordCache};

const SEED_S0: u64 = 0xF1EA_5EED;
const WARMUP_STEPS: usize = 20;

/// One jsf64 transition. Returns the new `s3`.
///
/// Every right-hand side reads the old words except `s3`, which uses the
/// freshly computed `s0`.
#[inline(always)]
pub(crate) fn step(s: &mut [u64; 4]) -> u64 {
    let e = s[0].wrapping_sub(rotl(s[1], 7));
    s[0] = s[1] ^ rotl(s[2], 13);
    s[1] = s[2].wrapping_add(rotl(s[3], 37));
    s[2] = s[3].wrapping_add(e);
    s[3] = e.wrapping_add(s[0]);
    s[3]
}

/// jsf64 engine
///
/// # Example
/// ```
/// use bitgenerators_core::{BitGenerator, Jsf64};
///
/// let mut rng = Jsf64::new([1, 2, 3]);
/// assert_eq!(rng.next_uint64(), 0xF004_4879_A162_8284);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Jsf64State", from = "Jsf64State")]
pub struct Jsf64 {
    s: [u64; 4],
    half: HalfWordCache,
}

impl Jsf64 {
    /// Seed a new engine from three seed words.
    pub fn new(seed: [u64; 3]) -> Self {
        let mut s = [SEED_S0, seed[0], seed[1], seed[2]];
        for _ in 0..WARMUP_STEPS {
            step(&mut s);
        }
        debug!(
            "jsf64 seeded from {:#018x} {:#018x} {:#018x}",
            seed[0], seed[1], seed[2]
        );
        Self {
            s,
            half: HalfWordCache::default(),
        }
    }

    /// Current state words.
    pub fn words(&self) -> [u64; 4] {
        self.s
    }
}

impl BitGenerator for Jsf64 {
    #[inline]
    fn next_uint64(&mut self) -> u64 {
        step(&mut self.s)
    }

    #[inline]
    fn next_uint32(&mut self) -> u32 {
        let s = &mut self.s;
        self.half.next_uint32(|| step(s))
    }
}

/// Snapshot of a [`Jsf64`] engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jsf64State(EngineState);

impl Jsf64State {
    pub fn new(words: [u64; 4], has_cached: bool, cached_value: u32) -> Self {
        Self(EngineState {
            words,
            has_cached,
            cached_value,
        })
    }

    pub fn words(&self) -> [u64; 4] {
        self.0.words
    }

    pub fn has_cached(&self) -> bool {
        self.0.has_cached
    }

    pub fn cached_value(&self) -> u32 {
        self.0.cached_value
    }
}

impl From<EngineState> for Jsf64State {
    fn from(state: EngineState) -> Self {
        Self(state)
    }
}

impl From<Jsf64State> for EngineState {
    fn from(state: Jsf64State) -> Self {
        state.0
    }
}

impl From<Jsf64State> for Jsf64 {
    fn from(state: Jsf64State) -> Self {
        Self::from_state(state)
    }
}

impl From<Jsf64> for Jsf64State {
    fn from(rng: Jsf64) -> Self {
        rng.get_state()
    }
}

impl Engine for Jsf64 {
    type Seed = [u64; 3];
    type State = Jsf64State;

    const ALGORITHM: Algorithm = Algorithm::Jsf64;

    fn seeded(seed: [u64; 3]) -> Self {
        Self::new(seed)
    }

    fn get_state(&self) -> Jsf64State {
        Jsf64State::new(self.s, self.half.has_cached(), self.half.cached_value())
    }

    fn set_state(&mut self, state: Jsf64State) {
        self.s = state.words();
        self.half = HalfWordCache::from_parts(state.has_cached(), state.cached_value());
    }

    fn from_state(state: Jsf64State) -> Self {
        Self {
            s: state.words(),
            half: HalfWordCache::from_parts(state.has_cached(), state.cached_value()),
        }
    }
}

impl RngCore for Jsf64 {
    fn next_u32(&mut self) -> u32 {
        self.next_uint32()
    }

    fn next_u64(&mut self) -> u64 {
        self.next_uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Jsf64 {
    /// Three little-endian seed words.
    type Seed = [u8; 24];

    fn from_seed(seed: [u8; 24]) -> Self {
        let mut words = [0u64; 3];
        le::read_u64_into(&seed, &mut words);
        Self::new(words)
    }
}

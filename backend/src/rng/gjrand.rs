//! gjrand bit generator
//!
//! Four 64-bit words mixed by additions, xors and rotations, with the last
//! word acting as a Weyl counter (`s3 += 0x55AA96A5` every step).
//!
//! # Seeding
//!
//! Two seed words go into `s0`/`s1`, `s2` starts at 2000001 and `s3` at 0.
//! Fourteen transitions are discarded before any output is surfaced.

use log::debug;
use rand_core::{impls, le, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{rotl, Algorithm, BitGenerator, Engine, EngineState, HalfWordCache};

const SEED_S2: u64 = 2_000_001;
const WEYL_INCREMENT: u64 = 0x55AA_96A5;
const WARMUP_STEPS: usize = 14;

/// One gjrand transition. Returns `s0` after all updates.
#[inline(always)]
pub(crate) fn step(s: &mut [u64; 4]) -> u64 {
    s[1] = s[1].wrapping_add(s[2]);
    s[0] = rotl(s[0], 32);
    s[2] ^= s[1];
    s[3] = s[3].wrapping_add(WEYL_INCREMENT);
    s[0] = s[0].wrapping_add(s[1]);
    s[2] = rotl(s[2], 23);
    s[1] ^= s[0];
    s[0] = s[0].wrapping_add(s[2]);
    s[1] = rotl(s[1], 19);
    s[2] = s[2].wrapping_add(s[0]);
    s[1] = s[1].wrapping_add(s[3]);
    s[0]
}

/// gjrand engine
///
/// # Example
/// ```
/// use bitgenerators_core::{BitGenerator, Gjrand};
///
/// let mut rng = Gjrand::new([1, 2]);
/// assert_eq!(rng.next_uint64(), 0x1BBA_D0FE_0243_C889);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GjrandState", from = "GjrandState")]
pub struct Gjrand {
    s: [u64; 4],
    half: HalfWordCache,
}

impl Gjrand {
    /// Seed a new engine from two seed words.
    pub fn new(seed: [u64; 2]) -> Self {
        let mut s = [seed[0], seed[1], SEED_S2, 0];
        for _ in 0..WARMUP_STEPS {
            step(&mut s);
        }
        debug!("gjrand seeded from {:#018x} {:#018x}", seed[0], seed[1]);
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

impl BitGenerator for Gjrand {
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

/// Snapshot of a [`Gjrand`] engine.
///
/// Serializes as `{words, has_cached, cached_value}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GjrandState(EngineState);

impl GjrandState {
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

impl From<EngineState> for GjrandState {
    fn from(state: EngineState) -> Self {
        Self(state)
    }
}

impl From<GjrandState> for EngineState {
    fn from(state: GjrandState) -> Self {
        state.0
    }
}

impl From<GjrandState> for Gjrand {
    fn from(state: GjrandState) -> Self {
        Self::from_state(state)
    }
}

impl From<Gjrand> for GjrandState {
    fn from(rng: Gjrand) -> Self {
        rng.get_state()
    }
}

impl Engine for Gjrand {
    type Seed = [u64; 2];
    type State = GjrandState;

    const ALGORITHM: Algorithm = Algorithm::Gjrand;

    fn seeded(seed: [u64; 2]) -> Self {
        Self::new(seed)
    }

    fn get_state(&self) -> GjrandState {
        GjrandState::new(self.s, self.half.has_cached(), self.half.cached_value())
    }

    fn set_state(&mut self, state: GjrandState) {
        self.s = state.words();
        self.half = HalfWordCache::from_parts(state.has_cached(), state.cached_value());
    }

    fn from_state(state: GjrandState) -> Self {
        Self {
            s: state.words(),
            half: HalfWordCache::from_parts(state.has_cached(), state.cached_value()),
        }
    }
}

impl RngCore for Gjrand {
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

impl SeedableRng for Gjrand {
    /// Two little-endian seed words.
    type Seed = [u8; 16];

    fn from_seed(seed: [u8; 16]) -> Self {
        let mut words = [0u64; 2];
        le::read_u64_into(&seed, &mut words);
        Self::new(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_single_transition_vector() {
        let mut s = [1, 2, 3, 4];
        let out = step(&mut s);
        assert_eq!(out, 0x1_0300_0005);
        assert_eq!(s, [0x1_0300_0005, 0x8_0000_55AA_96A9, 0x1_0600_0005, 0x55AA_96A9]);
    }

    #[test]
    fn test_step_from_zero_only_advances_counter() {
        let mut s = [0; 4];
        assert_eq!(step(&mut s), 0);
        assert_eq!(s, [0, WEYL_INCREMENT, 0, WEYL_INCREMENT]);
    }

    #[test]
    fn test_seed_1_2_pinned_state_and_draws() {
        let mut rng = Gjrand::new([1, 2]);
        assert_eq!(
            rng.words(),
            [
                0x534B_5074_D83F_8500,
                0xEFCB_C7D1_9CC4_B792,
                0x3C39_162F_BB2B_A19F,
                0x4_AF54_3D06,
            ]
        );
        assert_eq!(rng.next_uint64(), 0x1BBA_D0FE_0243_C889);
        assert_eq!(rng.next_uint64(), 0xEFDA_BDF5_36BA_D228);
        assert_eq!(rng.next_uint64(), 0x7843_F5EC_94E8_4DA7);
    }

    #[test]
    fn test_warmup_advances_counter_fourteen_times() {
        let rng = Gjrand::new([0, 0]);
        assert_eq!(rng.words()[3], WEYL_INCREMENT * WARMUP_STEPS as u64);
    }

    #[test]
    fn test_seedable_rng_decodes_little_endian() {
        let mut bytes = [0u8; 16];
        bytes[0] = 1;
        bytes[8] = 2;
        let mut a = Gjrand::from_seed(bytes);
        let mut b = Gjrand::new([1, 2]);
        assert_eq!(a.next_u64(), b.next_uint64());
    }

    #[test]
    fn test_next_u32_uses_packing_policy() {
        let mut a = Gjrand::new([1, 2]);
        assert_eq!(a.next_u32(), 0x0243_C889);
        assert_eq!(a.next_u32(), 0x1BBA_D0FE);
    }

    #[test]
    fn test_registry_counts_match_engine() {
        assert_eq!(Algorithm::Gjrand.warmup_steps(), WARMUP_STEPS);
        assert_eq!(Algorithm::Gjrand.seed_words(), 2);
    }

    #[test]
    fn test_engine_serializes_as_state_layout() {
        let mut rng = Gjrand::new([1, 2]);
        rng.next_uint32();
        let json = serde_json::to_value(&rng).unwrap();
        assert_eq!(json, serde_json::to_value(rng.get_state()).unwrap());
        assert_eq!(json["has_cached"], true);
        assert!(json.get("s").is_none());
        assert!(json.get("half").is_none());

        let mut restored: Gjrand = serde_json::from_value(json).unwrap();
        assert_eq!(restored, rng);
        assert_eq!(restored.next_uint32(), rng.next_uint32());
        assert_eq!(restored.next_uint64(), rng.next_uint64());
    }
}

//! Checkpoint Tests - Save/Load Generator State
//!
//! Critical invariants tested:
//! - Determinism: restored engine produces identical output
//! - Cache fidelity: a pending 32-bit half survives save/load
//! - Variant safety: state from one engine is rejected by the other
//! - Integrity: tampered checkpoints are rejected

use bitgenerators_core::checkpoint::compute_state_checksum;
use bitgenerators_core::{
    Algorithm, AnyGenerator, BitGenerator, Checkpoint, CheckpointError, Engine, EngineState,
    Gjrand, GjrandState, Jsf64, Jsf64State,
};

// ============================================================================
// Typed get_state / set_state
// ============================================================================

#[test]
fn test_gjrand_set_get_round_trip_1000_draws() {
    let mut rng = Gjrand::new([123, 456]);
    rng.skip(17);

    let mut restored = Gjrand::new([0, 0]);
    restored.set_state(rng.get_state());

    for i in 0..1000 {
        assert_eq!(rng.next_uint64(), restored.next_uint64(), "diverged at draw {}", i);
    }
}

#[test]
fn test_jsf64_set_get_round_trip_with_pending_half() {
    let mut rng = Jsf64::new([7, 8, 9]);
    rng.next_uint32();

    let state = rng.get_state();
    assert!(state.has_cached());

    let mut restored = Jsf64::from_state(state);
    for i in 0..1000 {
        assert_eq!(rng.next_uint32(), restored.next_uint32(), "diverged at draw {}", i);
    }
}

#[test]
fn test_set_state_in_place_round_trip() {
    let mut rng = Gjrand::new([31, 41]);
    rng.next_uint32();
    let mut reference = rng.clone();

    let snapshot = rng.get_state();
    rng.set_state(snapshot);

    for _ in 0..1000 {
        assert_eq!(rng.next_uint32(), reference.next_uint32());
        assert_eq!(rng.next_uint64(), reference.next_uint64());
    }
}

#[test]
fn test_set_state_accepts_any_pattern() {
    let mut rng = Jsf64::new([1, 2, 3]);
    let state = Jsf64State::new([u64::MAX, 0, u64::MAX, 0], true, u32::MAX);
    rng.set_state(state);
    assert_eq!(rng.get_state(), state);
    assert_eq!(rng.next_uint32(), u32::MAX);
}

#[test]
fn test_stale_cached_value_is_captured() {
    let mut rng = Gjrand::new([1, 2]);
    rng.next_uint32();
    rng.next_uint32();

    let state = rng.get_state();
    assert!(!state.has_cached());
    assert_eq!(state.cached_value(), 0x1BBA_D0FE);
}

#[test]
fn test_typed_state_serializes_as_flat_layout() {
    let state = GjrandState::new([1, u64::MAX, 3, 4], true, 0xDEAD_BEEF);
    let value = serde_json::to_value(state).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "words": [1u64, u64::MAX, 3u64, 4u64],
            "has_cached": true,
            "cached_value": 0xDEAD_BEEFu32,
        })
    );
    let back: GjrandState = serde_json::from_value(value).unwrap();
    assert_eq!(back, state);
}

// ============================================================================
// Checkpoint envelope
// ============================================================================

#[test]
fn test_checkpoint_json_round_trip_determinism() {
    let mut rng = Jsf64::new([1, 2, 3]);
    rng.skip(250);
    rng.next_uint32();

    let json = Checkpoint::capture(&rng).to_json().unwrap();
    let mut restored: Jsf64 = Checkpoint::from_json(&json).unwrap().restore().unwrap();

    for _ in 0..1000 {
        assert_eq!(rng.next_uint32(), restored.next_uint32());
    }
}

#[test]
fn test_checkpoint_preserves_extreme_words() {
    let state = EngineState {
        words: [u64::MAX, 1 << 63, (1 << 53) + 1, 0],
        has_cached: true,
        cached_value: u32::MAX,
    };
    let checkpoint = Checkpoint::from_parts(Algorithm::Gjrand, state);
    let parsed = Checkpoint::from_json(&checkpoint.to_json().unwrap()).unwrap();
    assert_eq!(parsed, checkpoint);
    assert_eq!(parsed.state, state);
}

#[test]
fn test_checkpoint_rejects_other_algorithm() {
    let checkpoint = Checkpoint::capture(&Gjrand::new([1, 2]));
    let result: Result<Jsf64, _> = checkpoint.restore();
    assert_eq!(
        result.unwrap_err(),
        CheckpointError::AlgorithmMismatch {
            expected: Algorithm::Jsf64,
            found: Algorithm::Gjrand,
        }
    );
}

#[test]
fn test_checkpoint_rejects_tampered_state() {
    let mut checkpoint = Checkpoint::capture(&Jsf64::new([1, 2, 3]));
    checkpoint.state.words[0] ^= 1;

    let err = checkpoint.restore::<Jsf64>().unwrap_err();
    assert!(matches!(err, CheckpointError::ChecksumMismatch { .. }));
}

#[test]
fn test_checkpoint_rejects_flipped_cache_flag() {
    let mut checkpoint = Checkpoint::capture(&Gjrand::new([1, 2]));
    checkpoint.state.has_cached = true;
    assert!(matches!(
        checkpoint.verify(),
        Err(CheckpointError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_checkpoint_rejects_malformed_json() {
    let err = Checkpoint::from_json("{\"format_version\": 1}").unwrap_err();
    assert!(matches!(err, CheckpointError::Json(_)));
}

#[test]
fn test_checkpoint_checksum_matches_helper() {
    let rng = Gjrand::new([5, 5]);
    let checkpoint = Checkpoint::capture(&rng);
    let expected = compute_state_checksum(Algorithm::Gjrand, &EngineState::from(rng.get_state()));
    assert_eq!(checkpoint.checksum, expected);
}

#[test]
fn test_restore_into_existing_engine() {
    let mut source = Gjrand::new([10, 20]);
    source.skip(3);
    let checkpoint = Checkpoint::capture(&source);

    let mut target = Gjrand::new([0, 0]);
    checkpoint.restore_into(&mut target).unwrap();
    assert_eq!(target, source);
}

#[test]
fn test_any_generator_checkpoint_round_trip() {
    for algorithm in Algorithm::ALL {
        let seed: Vec<u64> = (1..=algorithm.seed_words() as u64).collect();
        let mut rng = AnyGenerator::seeded(algorithm, &seed).unwrap();
        rng.next_uint32();

        let checkpoint = rng.checkpoint();
        assert_eq!(checkpoint.algorithm, algorithm);

        let mut restored = AnyGenerator::from_checkpoint(&checkpoint).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_uint32(), restored.next_uint32());
            assert_eq!(rng.next_double(), restored.next_double());
        }
    }
}

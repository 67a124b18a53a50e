//! Tests for runtime generator configuration

use bitgenerators_core::{
    Algorithm, BitGenerator, ConfigError, GeneratorConfig, Gjrand, Jsf64, SeedLengthError,
};

#[test]
fn test_config_builds_gjrand() {
    let config = GeneratorConfig::from_json(r#"{"algorithm": "gjrand", "seed": [1, 2]}"#).unwrap();
    let mut rng = config.build().unwrap();
    assert_eq!(rng.algorithm(), Algorithm::Gjrand);
    assert_eq!(rng.next_uint64(), 0x1BBA_D0FE_0243_C889);
}

#[test]
fn test_config_skip_discards_draws() {
    let json = r#"{"algorithm": "jsf64", "seed": [1, 2, 3], "skip": 2}"#;
    let mut rng = GeneratorConfig::from_json(json).unwrap().build().unwrap();
    assert_eq!(rng.next_uint64(), 0x69C0_742D_6472_06DA);
}

#[test]
fn test_config_accepts_full_width_seed_words() {
    let json = format!(
        r#"{{"algorithm": "gjrand", "seed": [{}, {}]}}"#,
        u64::MAX,
        u64::MAX - 1
    );
    let mut rng = GeneratorConfig::from_json(&json).unwrap().build().unwrap();
    let mut typed = Gjrand::new([u64::MAX, u64::MAX - 1]);
    assert_eq!(rng.next_uint64(), typed.next_uint64());
}

#[test]
fn test_config_rejects_wrong_seed_count() {
    let err = GeneratorConfig::from_json(r#"{"algorithm": "jsf64", "seed": [1, 2]}"#).unwrap_err();
    assert_eq!(
        err,
        ConfigError::SeedLength(SeedLengthError {
            algorithm: Algorithm::Jsf64,
            expected: 3,
            actual: 2,
        })
    );
}

#[test]
fn test_config_rejects_negative_seed() {
    let err = GeneratorConfig::from_json(r#"{"algorithm": "gjrand", "seed": [-1, 2]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_build_unvalidated_config_still_checks_seed() {
    let config = GeneratorConfig::new(Algorithm::Gjrand, vec![1]);
    assert!(config.build().is_err());
}

#[test]
fn test_config_serializes_back() {
    let config = GeneratorConfig {
        algorithm: Algorithm::Jsf64,
        seed: vec![4, 5, 6],
        skip: 10,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);

    let mut built = config.build().unwrap();
    let mut typed = Jsf64::new([4, 5, 6]);
    typed.skip(10);
    assert_eq!(built.next_uint64(), typed.next_uint64());
}

//! Checkpoint - Save/Load Generator State
//!
//! Wraps an engine snapshot in a versioned, algorithm-tagged envelope with a
//! SHA256 checksum, so long-running jobs can persist a stream and resume it
//! exactly.
//!
//! # Critical Invariants
//!
//! - **Exactness**: words, cache flag and cached value survive bit-for-bit
//! - **Variant safety**: a checkpoint only restores into the engine it came from
//! - **Integrity**: edited or truncated state is rejected by the checksum

use log::warn;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::rng::{Algorithm, AnyGenerator, Engine, EngineState};

/// Current on-disk layout.
pub const CHECKPOINT_FORMAT_VERSION: u32 = 1;

/// Reasons a checkpoint cannot be restored.
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Unsupported checkpoint format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Checkpoint holds {found} state, cannot restore into {expected}")]
    AlgorithmMismatch {
        expected: Algorithm,
        found: Algorithm,
    },

    #[error("Checkpoint checksum mismatch: stored {stored}, computed {computed}")]
    ChecksumMismatch { stored: String, computed: String },

    #[error("Invalid checkpoint JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CheckpointError {
    fn from(err: serde_json::Error) -> Self {
        CheckpointError::Json(err.to_string())
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Serializable capture of one engine.
///
/// # Example
/// ```
/// use bitgenerators_core::{BitGenerator, Checkpoint, Gjrand};
///
/// let mut rng = Gjrand::new([1, 2]);
/// rng.next_uint32();
///
/// let json = Checkpoint::capture(&rng).to_json().unwrap();
/// let mut resumed: Gjrand = Checkpoint::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(resumed.next_uint32(), rng.next_uint32());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub format_version: u32,
    pub algorithm: Algorithm,
    pub state: EngineState,
    /// Lowercase hex SHA256 of the algorithm id and the state fields
    pub checksum: String,
}

impl Checkpoint {
    /// Snapshot a typed engine.
    pub fn capture<E: Engine>(engine: &E) -> Self {
        Self::from_parts(E::ALGORITHM, engine.get_state().into())
    }

    /// Build a checksummed envelope around an untagged snapshot.
    pub fn from_parts(algorithm: Algorithm, state: EngineState) -> Self {
        Self {
            format_version: CHECKPOINT_FORMAT_VERSION,
            algorithm,
            state,
            checksum: compute_state_checksum(algorithm, &state),
        }
    }

    /// Check version and checksum.
    pub fn verify(&self) -> Result<(), CheckpointError> {
        if self.format_version != CHECKPOINT_FORMAT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.format_version,
                expected: CHECKPOINT_FORMAT_VERSION,
            });
        }
        let computed = compute_state_checksum(self.algorithm, &self.state);
        if computed != self.checksum {
            warn!(
                "rejecting {} checkpoint: checksum {} does not match {}",
                self.algorithm, self.checksum, computed
            );
            return Err(CheckpointError::ChecksumMismatch {
                stored: self.checksum.clone(),
                computed,
            });
        }
        Ok(())
    }

    /// Rebuild the typed engine this checkpoint was captured from.
    pub fn restore<E: Engine>(&self) -> Result<E, CheckpointError> {
        if self.algorithm != E::ALGORITHM {
            warn!(
                "rejecting {} checkpoint for a {} engine",
                self.algorithm,
                E::ALGORITHM
            );
            return Err(CheckpointError::AlgorithmMismatch {
                expected: E::ALGORITHM,
                found: self.algorithm,
            });
        }
        self.verify()?;
        log::debug!("restoring {} from checkpoint", self.algorithm);
        Ok(E::from_state(self.state.into()))
    }

    /// Install this checkpoint into an existing engine.
    pub fn restore_into<E: Engine>(&self, engine: &mut E) -> Result<(), CheckpointError> {
        *engine = self.restore()?;
        Ok(())
    }

    /// Rebuild whichever engine the checkpoint names.
    pub fn restore_any(&self) -> Result<AnyGenerator, CheckpointError> {
        self.verify()?;
        Ok(AnyGenerator::from_engine_state(self.algorithm, self.state))
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a checkpoint. Integrity is checked on restore, not here.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl AnyGenerator {
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::from_parts(self.algorithm(), self.engine_state())
    }

    pub fn from_checkpoint(checkpoint: &Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.restore_any()
    }
}

// ============================================================================
// Checksum
// ============================================================================

/// SHA256 over `id ‖ words (LE) ‖ has_cached ‖ cached_value (LE)`.
pub fn compute_state_checksum(algorithm: Algorithm, state: &EngineState) -> String {
    let mut hasher = Sha256::new();
    hasher.update(algorithm.id().as_bytes());
    for word in &state.words {
        hasher.update(word.to_le_bytes());
    }
    hasher.update([state.has_cached as u8]);
    hasher.update(state.cached_value.to_le_bytes());
    format!("{:x}", hasher.finalize())
}

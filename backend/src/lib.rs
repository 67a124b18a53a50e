//! Bit Generators Core - gjrand and jsf64
//!
//! Fast, non-cryptographic 64-bit pseudo-random engines with deterministic
//! seeding and exact checkpoint/restore.
//!
//! # Architecture
//!
//! - **rng**: the engines, the shared `BitGenerator` interface and runtime dispatch
//! - **checkpoint**: versioned, checksummed state envelopes
//! - **config**: runtime-typed generator configuration
//! - **state_dict**: the flat state layout exposed to Python
//!
//! # Critical Invariants
//!
//! 1. Output is bit-exact for a given seed or restored state
//! 2. A snapshot captures the four state words AND the pending 32-bit half
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;
pub mod state_dict;

// Re-exports for convenience
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{ConfigError, GeneratorConfig};
pub use rng::{
    Algorithm, AnyGenerator, BitGenerator, Engine, EngineState, Gjrand, GjrandState,
    HalfWordCache, Jsf64, Jsf64State, SeedLengthError,
};
pub use state_dict::{StateDict, StateDictError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn bitgenerators_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyGjrand>()?;
    m.add_class::<ffi::PyJsf64>()?;
    Ok(())
}

//! State conversion for the FFI boundary
//!
//! Python sees engine state as the dict layout used by numpy bit generators:
//!
//! ```python
//! {
//!     "bit_generator": "GJrand",
//!     "state": {"s": [s0, s1, s2, s3]},
//!     "has_uint32": 0,
//!     "uinteger": 0,
//! }
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::rng::{Algorithm, BitGenerator, EngineState};
use crate::state_dict::StateDict;

/// Extract a required field from a Python dict with clear error messages.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Convert an engine snapshot to the Python state dict.
pub fn state_to_py<'py>(
    py: Python<'py>,
    algorithm: Algorithm,
    state: &EngineState,
) -> PyResult<Bound<'py, PyDict>> {
    let flat = StateDict::from_engine_state(algorithm, state);

    let inner = PyDict::new_bound(py);
    inner.set_item("s", PyList::new_bound(py, flat.s))?;

    let dict = PyDict::new_bound(py);
    dict.set_item("bit_generator", flat.bit_generator)?;
    dict.set_item("state", inner)?;
    dict.set_item("has_uint32", flat.has_uint32)?;
    dict.set_item("uinteger", flat.uinteger)?;
    Ok(dict)
}

/// Parse a Python state dict, checking it belongs to `algorithm`.
///
/// # Errors
///
/// Raises ValueError if a field is missing or if [`StateDict`] rejects the
/// values (wrong `bit_generator`, `state["s"]` not four words, `uinteger`
/// wider than 32 bits).
pub fn state_from_py(algorithm: Algorithm, dict: &Bound<'_, PyDict>) -> PyResult<EngineState> {
    let bit_generator: String = extract_required(dict, "bit_generator")?;
    let inner: Bound<'_, PyDict> = extract_required(dict, "state")?;
    let flat = StateDict {
        bit_generator,
        s: extract_required(&inner, "s")?,
        has_uint32: extract_required(dict, "has_uint32")?,
        uinteger: extract_required(dict, "uinteger")?,
    };
    flat.into_engine_state(algorithm)
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// One raw draw, or a list of `size` raw draws.
pub fn random_raw(py: Python<'_>, rng: &mut impl BitGenerator, size: Option<usize>) -> PyObject {
    match size {
        None => rng.next_raw().into_py(py),
        Some(n) => {
            let mut out = vec![0u64; n];
            rng.fill_uint64(&mut out);
            out.into_py(py)
        }
    }
}

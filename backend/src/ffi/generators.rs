//! PyO3 wrappers for the engines
//!
//! # Example (from Python)
//!
//! ```python
//! from bitgenerators_core import GJrand
//!
//! rng = GJrand([1, 2])
//! saved = rng.state
//! first = rng.random_raw()
//! rng.state = saved
//! assert rng.random_raw() == first
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::state::{random_raw, state_from_py, state_to_py};
use crate::rng::{Algorithm, BitGenerator, Engine, EngineState, Gjrand, Jsf64, SeedLengthError};

impl From<SeedLengthError> for PyErr {
    fn from(err: SeedLengthError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for the gjrand engine
#[pyclass(name = "GJrand", module = "bitgenerators_core")]
pub struct PyGjrand {
    inner: Gjrand,
}

#[pymethods]
impl PyGjrand {
    /// Seed from a list of exactly two unsigned 64-bit words.
    #[new]
    fn new(seed: Vec<u64>) -> PyResult<Self> {
        let words = Algorithm::Gjrand.seed_array(&seed)?;
        Ok(Self {
            inner: Gjrand::new(words),
        })
    }

    /// Re-seed in place, dropping any cached half-word.
    fn seed(&mut self, seed: Vec<u64>) -> PyResult<()> {
        let words = Algorithm::Gjrand.seed_array(&seed)?;
        self.inner.reseed(words);
        Ok(())
    }

    /// Raw 64-bit output; a list of `size` values when given.
    #[pyo3(signature = (size=None))]
    fn random_raw(&mut self, py: Python<'_>, size: Option<usize>) -> PyObject {
        random_raw(py, &mut self.inner, size)
    }

    fn next_uint32(&mut self) -> u32 {
        self.inner.next_uint32()
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    #[getter]
    fn state<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        state_to_py(py, Algorithm::Gjrand, &EngineState::from(self.inner.get_state()))
    }

    #[setter]
    fn set_state(&mut self, value: Bound<'_, PyDict>) -> PyResult<()> {
        let state = state_from_py(Algorithm::Gjrand, &value)?;
        self.inner.set_state(state.into());
        Ok(())
    }
}

/// Python wrapper for the jsf64 engine
#[pyclass(name = "JSF64", module = "bitgenerators_core")]
pub struct PyJsf64 {
    inner: Jsf64,
}

#[pymethods]
impl PyJsf64 {
    /// Seed from a list of exactly three unsigned 64-bit words.
    #[new]
    fn new(seed: Vec<u64>) -> PyResult<Self> {
        let words = Algorithm::Jsf64.seed_array(&seed)?;
        Ok(Self {
            inner: Jsf64::new(words),
        })
    }

    fn seed(&mut self, seed: Vec<u64>) -> PyResult<()> {
        let words = Algorithm::Jsf64.seed_array(&seed)?;
        self.inner.reseed(words);
        Ok(())
    }

    #[pyo3(signature = (size=None))]
    fn random_raw(&mut self, py: Python<'_>, size: Option<usize>) -> PyObject {
        random_raw(py, &mut self.inner, size)
    }

    fn next_uint32(&mut self) -> u32 {
        self.inner.next_uint32()
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    #[getter]
    fn state<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        state_to_py(py, Algorithm::Jsf64, &EngineState::from(self.inner.get_state()))
    }

    #[setter]
    fn set_state(&mut self, value: Bound<'_, PyDict>) -> PyResult<()> {
        let state = state_from_py(Algorithm::Jsf64, &value)?;
        self.inner.set_state(state.into());
        Ok(())
    }
}

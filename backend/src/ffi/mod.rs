//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the engines to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: seeding, raw draws and state, nothing else
//! 2. **Simple types**: ints, lists and dicts at the boundary
//! 3. **Validate inputs**: seed lengths and state dicts are checked here
//! 4. **No references**: Python gets copies of state, never references

pub mod generators;
pub mod state;

pub use generators::{PyGjrand, PyJsf64};

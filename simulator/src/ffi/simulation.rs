//! PyO3 wrapper for the simulation engine
//!
//! This module provides the Python interface to the Rust engine.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{parse_simulation_params, result_to_py};
use crate::engine;

/// Run one simulation from a config dict.
///
/// # Example (from Python)
///
/// ```python
/// from competence_simulator._core import simulate
///
/// result = simulate({
///     "sample_size": 4000,
///     "correlation": 0.0,
///     "seed": 42,
/// })
/// print(result["bins"][0]["mean_perceived"])
/// ```
///
/// # Errors
///
/// Raises ValueError if required fields are missing, type conversions
/// fail, or the parameters fail validation. No partial result is ever
/// returned.
#[pyfunction]
pub fn simulate(py: Python, config: &Bound<'_, PyDict>) -> PyResult<Py<PyDict>> {
    let params = parse_simulation_params(config)?;

    let result = engine::simulate(&params)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    result_to_py(py, &result)
}

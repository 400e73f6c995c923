//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::models::{Participant, QuartileBin, SimulationParams};
use crate::SimulationResult;

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if the field is missing or type conversion fails.
fn extract_required<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Missing required field '{}'",
                key
            ))
        })?
        .extract()
}

/// Extract an optional field from a Python dict.
///
/// Returns `Some(value)` if the field exists, `None` if missing; errors
/// only on a failed type conversion.
fn extract_optional<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: for<'py> FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => Ok(Some(value.extract()?)),
        None => Ok(None),
    }
}

/// Extract a field with a default value if missing.
fn extract_with_default<T>(dict: &Bound<'_, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Convert a Python config dict to SimulationParams.
///
/// Signed integers are accepted at this boundary so out-of-range values
/// arrive as validation errors rather than extraction errors; the core
/// types are unsigned.
///
/// # Errors
///
/// Returns PyValueError if required fields are missing, conversions fail,
/// or values are out of range.
pub fn parse_simulation_params(py_config: &Bound<'_, PyDict>) -> PyResult<SimulationParams> {
    let sample_size: i64 = extract_required(py_config, "sample_size")?;
    if sample_size <= 0 {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
            "sample_size must be positive",
        ));
    }

    let correlation: f64 = extract_required(py_config, "correlation")?;

    let quartile_count: i64 = extract_with_default(
        py_config,
        "quartile_count",
        SimulationParams::DEFAULT_QUARTILE_COUNT as i64,
    )?;
    if quartile_count < 2 {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "quartile_count must be at least 2, got {}",
            quartile_count
        )));
    }

    let seed: Option<u64> = extract_optional(py_config, "seed")?;

    let mut params = SimulationParams::new(sample_size as usize, correlation)
        .with_quartile_count(quartile_count as usize);
    if let Some(seed) = seed {
        params = params.with_seed(seed);
    }

    Ok(params)
}

/// Convert SimulationParams to a Python dict.
pub fn params_to_py(py: Python, params: &SimulationParams) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("sample_size", params.sample_size)?;
    dict.set_item("correlation", params.correlation)?;
    dict.set_item("quartile_count", params.quartile_count)?;
    dict.set_item("seed", params.seed)?;

    Ok(dict.into())
}

/// Convert a Participant to a Python dict.
pub fn participant_to_py(py: Python, participant: &Participant) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("actual", participant.actual)?;
    dict.set_item("perceived", participant.perceived)?;

    Ok(dict.into())
}

/// Convert a QuartileBin to a Python dict.
///
/// NaN means (empty bins) become Python None so the host can tell
/// "no data" apart from a genuine zero.
pub fn quartile_bin_to_py(py: Python, bin: &QuartileBin) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("index", bin.index)?;
    dict.set_item("label", &bin.label)?;
    dict.set_item("lower_bound", bin.lower_bound)?;
    dict.set_item("upper_bound", bin.upper_bound)?;
    dict.set_item("participant_count", bin.participant_count)?;

    if bin.mean_actual.is_nan() {
        dict.set_item("mean_actual", py.None())?;
    } else {
        dict.set_item("mean_actual", bin.mean_actual)?;
    }

    if bin.mean_perceived.is_nan() {
        dict.set_item("mean_perceived", py.None())?;
    } else {
        dict.set_item("mean_perceived", bin.mean_perceived)?;
    }

    Ok(dict.into())
}

/// Convert a SimulationResult to a Python dict.
pub fn result_to_py(py: Python, result: &SimulationResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("params", params_to_py(py, &result.params)?)?;
    dict.set_item("seed", result.seed)?;

    let participants = PyList::empty(py);
    for participant in &result.participants {
        participants.append(participant_to_py(py, participant)?)?;
    }
    dict.set_item("participants", participants)?;

    let bins = PyList::empty(py);
    for bin in &result.bins {
        bins.append(quartile_bin_to_py(py, bin)?)?;
    }
    dict.set_item("bins", bins)?;

    let perceived_bins = PyList::empty(py);
    for bin in &result.perceived_bins {
        perceived_bins.append(quartile_bin_to_py(py, bin)?)?;
    }
    dict.set_item("perceived_bins", perceived_bins)?;

    Ok(dict.into())
}

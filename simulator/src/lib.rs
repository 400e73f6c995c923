//! Competence Simulator Core - Rust Engine
//!
//! Monte Carlo simulation of the Dunning-Kruger experiment: generates a
//! synthetic population of (actual, perceived) competence pairs with a
//! chosen correlation, bins it by quartile, and shows that the famous
//! chart shape falls out of regression to the mean alone — it appears
//! even when the injected correlation is zero.
//!
//! # Architecture
//!
//! - **models**: Domain types (SimulationParams, Participant, QuartileBin)
//! - **sampler**: Synthetic population generation
//! - **quartiles**: Equal-frequency binning and per-bin means
//! - **engine**: The `simulate` pipeline and its result type
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. `simulate` is a pure function of its parameters plus the seed
//! 2. All randomness is deterministic (seeded RNG, fixed draw order)
//! 3. Bin counts always sum to the sample size; empty bins carry NaN
//!    means, never a silent zero
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod engine;
pub mod models;
pub mod quartiles;
pub mod rng;
pub mod sampler;

// Re-exports for convenience
pub use engine::{simulate, SimulationResult};
pub use models::{
    params::{SimulationError, SimulationParams},
    participant::Participant,
    quartile::{QuartileBin, QUARTILE_LABELS},
};
pub use quartiles::{aggregate_by_quartile, quartile_label, ScoreAxis};
pub use rng::RngManager;
pub use sampler::generate_participants;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn competence_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::simulation::simulate, m)?)?;
    Ok(())
}

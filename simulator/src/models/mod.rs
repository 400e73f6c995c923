//! Domain types for the simulation
//!
//! - `params`: validated simulation configuration
//! - `participant`: one synthetic (actual, perceived) record
//! - `quartile`: per-quartile aggregate bin

pub mod params;
pub mod participant;
pub mod quartile;

pub use params::{SimulationError, SimulationParams};
pub use participant::Participant;
pub use quartile::{QuartileBin, QUARTILE_LABELS};

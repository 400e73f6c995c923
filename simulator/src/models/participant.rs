//! Participant model
//!
//! One synthetic participant: a "true" test performance and a
//! self-assessed one, both expressed as percentile ranks on the same
//! 0–100 scale so the two axes of the classic chart are directly
//! comparable.

use serde::{Deserialize, Serialize};

/// A single generated (actual, perceived) competence pair
///
/// Immutable once generated; lives only inside the `SimulationResult`
/// of the run that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Actual competence percentile, in [0, 100)
    pub actual: f64,

    /// Perceived (self-assessed) competence percentile, in [0, 100)
    pub perceived: f64,
}

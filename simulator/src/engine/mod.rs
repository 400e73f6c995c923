//! Simulation engine
//!
//! The one entry point the host layer calls: `simulate(params)` runs the
//! full pipeline and hands back a single immutable result.
//!
//! ```text
//! For each call:
//! 1. Validate parameters (no partial result ever exists)
//! 2. Resolve the seed (explicit, or fresh wall-clock entropy)
//! 3. Generate the synthetic population
//! 4. Aggregate quartile bins over the actual axis
//! 5. Aggregate quartile bins over the perceived axis
//! 6. Package everything into a SimulationResult
//! ```
//!
//! The pipeline is a pure function of `params` plus the resolved seed:
//! no shared state, no I/O, and each invocation is independent of every
//! previous one. Re-running with changed parameters produces a new
//! result value; nothing is mutated in place. Debouncing rapid parameter
//! changes is the host's concern, not the engine's.
//!
//! # Example
//!
//! ```
//! use competence_simulator_core_rs::{simulate, SimulationParams};
//!
//! let params = SimulationParams::new(4000, 0.0).with_seed(42);
//! let result = simulate(&params).unwrap();
//! assert_eq!(result.participants.len(), 4000);
//! assert_eq!(result.bins.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Participant, QuartileBin, SimulationError, SimulationParams};
use crate::quartiles::{aggregate_by_quartile, ScoreAxis};
use crate::rng::RngManager;
use crate::sampler::generate_participants;

/// Complete output of one simulation run
///
/// Owned by the caller that requested it; immutable. The next `simulate`
/// call supersedes it with a fresh value — `bins` and `perceived_bins`
/// always describe the `participants` sequence packaged alongside them,
/// never a stale aggregation from an earlier run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The parameters this result was computed from
    pub params: SimulationParams,

    /// The seed actually consumed. Equal to `params.seed` when one was
    /// given; otherwise the entropy seed drawn for this run, so even an
    /// unseeded run can be replayed.
    pub seed: u64,

    /// The full synthetic population, in generation order (scatter data)
    pub participants: Vec<Participant>,

    /// Equal-frequency bins over the actual-competence axis — the data
    /// behind the classic chart
    pub bins: Vec<QuartileBin>,

    /// The mirror grouping: equal-frequency bins over the
    /// perceived-competence axis
    pub perceived_bins: Vec<QuartileBin>,
}

/// Run one simulation.
///
/// # Arguments
///
/// * `params` - Simulation configuration; validated before anything runs
///
/// # Returns
///
/// * `Ok(SimulationResult)` - The complete, internally consistent result
/// * `Err(SimulationError)` - Validation failed; nothing was generated
pub fn simulate(params: &SimulationParams) -> Result<SimulationResult, SimulationError> {
    params.validate()?;

    let seed = params.seed.unwrap_or_else(entropy_seed);
    let mut rng = RngManager::new(seed);

    let participants = generate_participants(params, &mut rng);
    let bins = aggregate_by_quartile(&participants, params.quartile_count, ScoreAxis::Actual);
    let perceived_bins =
        aggregate_by_quartile(&participants, params.quartile_count, ScoreAxis::Perceived);

    Ok(SimulationResult {
        params: params.clone(),
        seed,
        participants,
        bins,
        perceived_bins,
    })
}

/// Fresh seed for runs that did not fix one.
fn entropy_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

//! Sample generation module for deterministic participant creation.
//!
//! Produces the synthetic population of (actual, perceived) competence
//! pairs with a configurable linear association between the two. All
//! generation is deterministic based on the RNG seed.
//!
//! # Key Principles
//!
//! 1. **Determinism**: Same seed + same params → bit-identical participants
//! 2. **Fixed draw order**: All actual raw scores are drawn first, then all
//!    noise values, each in participant-index order. Changing this order
//!    would silently break seed reproducibility.
//! 3. **Bivariate construction**: `perceived_raw = r * actual_raw +
//!    sqrt(1 - r^2) * noise`, which has correlation `r` in expectation
//! 4. **Percentile scaling**: both raw sequences are mapped to their
//!    empirical percentile rank on a 0–100 scale, so every participant is
//!    kept and the requested sample size is always met exactly
//!
//! # Example
//!
//! ```
//! use competence_simulator_core_rs::rng::RngManager;
//! use competence_simulator_core_rs::sampler::generate_participants;
//! use competence_simulator_core_rs::SimulationParams;
//!
//! let params = SimulationParams::new(100, 0.5).with_seed(42);
//! let mut rng = RngManager::new(42);
//! let participants = generate_participants(&params, &mut rng);
//! assert_eq!(participants.len(), 100);
//! ```

use crate::models::{Participant, SimulationParams};
use crate::rng::RngManager;

/// Upper end of the percentile scale shared by both score axes.
const PERCENTILE_SCALE: usize = 100;

/// Generate the synthetic population for one simulation run.
///
/// The caller is expected to have validated `params` already; this
/// function only consumes `sample_size` and `correlation`.
///
/// # Arguments
///
/// * `params` - Validated simulation parameters
/// * `rng` - Mutable reference to the run's RNG
///
/// # Returns
///
/// Exactly `params.sample_size` participants, in generation order.
pub fn generate_participants(
    params: &SimulationParams,
    rng: &mut RngManager,
) -> Vec<Participant> {
    let n = params.sample_size;

    // Draw order is part of the determinism contract: actual first,
    // then noise.
    let mut actual_raw = Vec::with_capacity(n);
    for _ in 0..n {
        actual_raw.push(rng.standard_normal());
    }

    let mut noise = Vec::with_capacity(n);
    for _ in 0..n {
        noise.push(rng.standard_normal());
    }

    let rho = params.correlation;
    let mix = (1.0 - rho * rho).sqrt();
    let perceived_raw: Vec<f64> = actual_raw
        .iter()
        .zip(noise.iter())
        .map(|(a, e)| rho * a + mix * e)
        .collect();

    let actual_pct = percentile_ranks(&actual_raw);
    let perceived_pct = percentile_ranks(&perceived_raw);

    actual_pct
        .into_iter()
        .zip(perceived_pct)
        .map(|(actual, perceived)| Participant { actual, perceived })
        .collect()
}

/// Map raw scores to their empirical percentile rank on the 0–100 scale.
///
/// `rank * 100 / n` with integer floor, where `rank` is the position in
/// ascending sorted order (ties broken by generation index via stable
/// sort). The floor discretizes the scale, so distinct raw scores can
/// share a percentile; the aggregator's tie-break policy absorbs this.
fn percentile_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    for (rank, &idx) in order.iter().enumerate() {
        ranks[idx] = ((rank * PERCENTILE_SCALE) / n) as f64;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_ranks_small() {
        // 3 values: ranks 0, 1, 2 → floor(rank * 100 / 3)
        let ranks = percentile_ranks(&[10.0, 30.0, 20.0]);
        assert_eq!(ranks, vec![0.0, 66.0, 33.0]);
    }

    #[test]
    fn test_percentile_ranks_ties_keep_input_order() {
        let ranks = percentile_ranks(&[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(ranks, vec![0.0, 25.0, 50.0, 75.0]);
    }

    #[test]
    fn test_requested_size_always_met() {
        for n in [1, 2, 7, 100] {
            let params = SimulationParams::new(n, 0.3).with_seed(9);
            let mut rng = RngManager::new(9);
            assert_eq!(generate_participants(&params, &mut rng).len(), n);
        }
    }

    #[test]
    fn test_perfect_correlation_collapses() {
        let params = SimulationParams::new(500, 1.0).with_seed(31);
        let mut rng = RngManager::new(31);
        for p in generate_participants(&params, &mut rng) {
            assert_eq!(p.actual, p.perceived);
        }
    }
}

//! Tests for the sample generator
//!
//! Covers the determinism contract, the bounded percentile scale, and the
//! behavior of the injected correlation at its interesting values
//! (0, +1, -1).

use competence_simulator_core_rs::rng::RngManager;
use competence_simulator_core_rs::sampler::generate_participants;
use competence_simulator_core_rs::{Participant, SimulationParams};

fn pearson(participants: &[Participant]) -> f64 {
    let n = participants.len() as f64;
    let mean_a: f64 = participants.iter().map(|p| p.actual).sum::<f64>() / n;
    let mean_p: f64 = participants.iter().map(|p| p.perceived).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_p = 0.0;
    for p in participants {
        let da = p.actual - mean_a;
        let dp = p.perceived - mean_p;
        cov += da * dp;
        var_a += da * da;
        var_p += dp * dp;
    }
    cov / (var_a.sqrt() * var_p.sqrt())
}

#[test]
fn test_generation_deterministic_with_seed() {
    let params = SimulationParams::new(500, 0.3).with_seed(42);

    let mut rng1 = RngManager::new(42);
    let first = generate_participants(&params, &mut rng1);

    let mut rng2 = RngManager::new(42);
    let second = generate_participants(&params, &mut rng2);

    assert_eq!(first, second, "Same seed must produce identical samples");
}

#[test]
fn test_different_seeds_produce_different_samples() {
    let params = SimulationParams::new(500, 0.3);

    let mut rng1 = RngManager::new(1);
    let first = generate_participants(&params, &mut rng1);

    let mut rng2 = RngManager::new(2);
    let second = generate_participants(&params, &mut rng2);

    assert_ne!(first, second);
}

#[test]
fn test_scores_stay_on_percentile_scale() {
    let params = SimulationParams::new(1000, 0.7).with_seed(11);
    let mut rng = RngManager::new(11);

    for p in generate_participants(&params, &mut rng) {
        assert!((0.0..100.0).contains(&p.actual), "actual {} off scale", p.actual);
        assert!(
            (0.0..100.0).contains(&p.perceived),
            "perceived {} off scale",
            p.perceived
        );
    }
}

#[test]
fn test_full_correlation_means_identical_percentiles() {
    let params = SimulationParams::new(2000, 1.0).with_seed(5);
    let mut rng = RngManager::new(5);

    for p in generate_participants(&params, &mut rng) {
        assert_eq!(p.actual, p.perceived);
    }
}

#[test]
fn test_negative_full_correlation_reverses_ranking() {
    let params = SimulationParams::new(2000, -1.0).with_seed(5);
    let mut rng = RngManager::new(5);
    let participants = generate_participants(&params, &mut rng);

    let r = pearson(&participants);
    assert!(r < -0.99, "correlation -1 should reverse the ranking, got r = {}", r);
}

#[test]
fn test_zero_correlation_pairs_are_independent() {
    // Sample correlation of independent pairs has standard error
    // ~ 1/sqrt(n) = 0.01 at n = 10,000.
    let params = SimulationParams::new(10_000, 0.0).with_seed(42);
    let mut rng = RngManager::new(42);
    let participants = generate_participants(&params, &mut rng);

    let r = pearson(&participants);
    assert!(
        r.abs() < 0.05,
        "correlation 0 should produce near-independent pairs, got r = {}",
        r
    );
}

#[test]
fn test_moderate_correlation_is_recovered() {
    let params = SimulationParams::new(10_000, 0.5).with_seed(42);
    let mut rng = RngManager::new(42);
    let participants = generate_participants(&params, &mut rng);

    // Rank correlation of a bivariate normal undershoots the raw-score
    // correlation slightly; a loose window is enough here.
    let r = pearson(&participants);
    assert!(
        (0.35..0.65).contains(&r),
        "injected correlation 0.5 poorly recovered: r = {}",
        r
    );
}

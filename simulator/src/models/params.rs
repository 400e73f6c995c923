//! Simulation parameters
//!
//! Validated configuration for one simulation run. A `SimulationParams`
//! value is a pure data holder: validation happens up front, before any
//! generation, and never as a side effect.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by parameter validation
///
/// Every failure is deterministic for the same input; there is nothing to
/// retry. `PartialEq` so tests can assert the exact kind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("sample_size must be positive")]
    EmptySample,

    #[error("correlation must lie within [-1, 1], got {0}")]
    CorrelationOutOfRange(f64),

    #[error("quartile_count must be at least 2, got {0}")]
    TooFewQuartiles(usize),

    #[error("sample_size ({sample_size}) must be at least quartile_count ({quartile_count})")]
    SampleSmallerThanQuartileCount {
        sample_size: usize,
        quartile_count: usize,
    },
}

/// Configuration for one simulation run
///
/// # Example
/// ```
/// use competence_simulator_core_rs::SimulationParams;
///
/// let params = SimulationParams::new(4000, 0.0).with_seed(42);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of synthetic participants to generate
    pub sample_size: usize,

    /// Linear association injected between actual and perceived raw
    /// scores, in [-1, 1]. The debunking argument lives near 0.
    pub correlation: f64,

    /// Number of equal-frequency bins over each score axis
    #[serde(default = "default_quartile_count")]
    pub quartile_count: usize,

    /// RNG seed. `None` means a fresh seed per run (non-reproducible by
    /// design); the seed actually used is recorded on the result.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_quartile_count() -> usize {
    SimulationParams::DEFAULT_QUARTILE_COUNT
}

impl SimulationParams {
    /// Quartiles, unless the caller asks for a different bin count.
    pub const DEFAULT_QUARTILE_COUNT: usize = 4;

    /// Create parameters with the default quartile count and no seed
    pub fn new(sample_size: usize, correlation: f64) -> Self {
        Self {
            sample_size,
            correlation,
            quartile_count: Self::DEFAULT_QUARTILE_COUNT,
            seed: None,
        }
    }

    /// Fix the RNG seed (makes the run reproducible)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the number of bins
    pub fn with_quartile_count(mut self, quartile_count: usize) -> Self {
        self.quartile_count = quartile_count;
        self
    }

    /// Validate the configuration
    ///
    /// Checked in order: sample size positive, correlation in [-1, 1]
    /// (NaN rejected), quartile count at least 2, and enough participants
    /// for every bin to be non-empty under ideal rounding.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.sample_size == 0 {
            return Err(SimulationError::EmptySample);
        }

        if !(-1.0..=1.0).contains(&self.correlation) {
            return Err(SimulationError::CorrelationOutOfRange(self.correlation));
        }

        if self.quartile_count < 2 {
            return Err(SimulationError::TooFewQuartiles(self.quartile_count));
        }

        if self.sample_size < self.quartile_count {
            return Err(SimulationError::SampleSmallerThanQuartileCount {
                sample_size: self.sample_size,
                quartile_count: self.quartile_count,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let params = SimulationParams::new(100, 0.5);
        assert_eq!(params.quartile_count, 4);
        assert_eq!(params.seed, None);
    }

    #[test]
    fn test_builders() {
        let params = SimulationParams::new(100, 0.5)
            .with_seed(42)
            .with_quartile_count(10);
        assert_eq!(params.seed, Some(42));
        assert_eq!(params.quartile_count, 10);
    }

    #[test]
    fn test_nan_correlation_rejected() {
        let params = SimulationParams::new(100, f64::NAN);
        assert!(matches!(
            params.validate(),
            Err(SimulationError::CorrelationOutOfRange(_))
        ));
    }
}

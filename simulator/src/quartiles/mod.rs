//! Quartile aggregation module.
//!
//! Partitions a population into equal-frequency bins along one score axis
//! and computes per-bin counts and means of both scores. The binning is
//! deliberately naive — unweighted arithmetic means, no outlier removal,
//! no smoothing — because the whole point is to show what quartile means
//! of noisy data look like untouched.
//!
//! # Tie-break policy
//!
//! Quantile cuts never split a run of equal axis values: the entire run
//! stays in the lower-indexed bin. This guarantees a total partition (no
//! participant dropped or double-counted) even on a heavily discretized
//! scale, at the cost of unequal bin sizes when ties are frequent. In the
//! degenerate all-equal case the first bin takes everything and later bins
//! report `participant_count = 0` with NaN means.

use crate::models::{Participant, QuartileBin, QUARTILE_LABELS};

/// Which score a partition is keyed on.
///
/// The classic chart bins by actual competence; the original experiment
/// also charts the mirror grouping by perceived competence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAxis {
    Actual,
    Perceived,
}

impl ScoreAxis {
    fn value(&self, participant: &Participant) -> f64 {
        match self {
            ScoreAxis::Actual => participant.actual,
            ScoreAxis::Perceived => participant.perceived,
        }
    }
}

/// Partition participants into `quartile_count` equal-frequency bins
/// along `axis` and aggregate each bin.
///
/// # Arguments
///
/// * `participants` - The population of one simulation run
/// * `quartile_count` - Number of bins (validated upstream to be >= 2)
/// * `axis` - Score used for the partition
///
/// # Returns
///
/// `quartile_count` bins ordered by ascending axis range. Counts always
/// sum to `participants.len()`; empty bins are reported, never an error.
pub fn aggregate_by_quartile(
    participants: &[Participant],
    quartile_count: usize,
    axis: ScoreAxis,
) -> Vec<QuartileBin> {
    let n = participants.len();
    if n == 0 {
        return (0..quartile_count).map(empty_bin(quartile_count)).collect();
    }

    // Stable sort: equal axis values keep generation order.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        axis.value(&participants[a])
            .total_cmp(&axis.value(&participants[b]))
    });

    let mut bins = Vec::with_capacity(quartile_count);
    let mut start = 0usize;
    let mut lower = axis.value(&participants[order[0]]);

    for index in 0..quartile_count {
        // Ideal equal-frequency cut after this bin.
        let mut end = ((index + 1) * n) / quartile_count;
        if end < start {
            end = start;
        }
        if index + 1 == quartile_count {
            end = n;
        } else if end > start {
            // Never split a run of equal values across the cut: the run
            // belongs to this (lower-indexed) bin.
            let boundary = axis.value(&participants[order[end - 1]]);
            while end < n && axis.value(&participants[order[end]]) == boundary {
                end += 1;
            }
        }

        let members = &order[start..end];
        let count = members.len();
        let upper = if count > 0 {
            axis.value(&participants[order[end - 1]])
        } else {
            lower
        };

        let (mean_actual, mean_perceived) = if count == 0 {
            (f64::NAN, f64::NAN)
        } else {
            let sum_actual: f64 = members.iter().map(|&i| participants[i].actual).sum();
            let sum_perceived: f64 = members.iter().map(|&i| participants[i].perceived).sum();
            (sum_actual / count as f64, sum_perceived / count as f64)
        };

        bins.push(QuartileBin {
            index,
            label: quartile_label(index, quartile_count),
            lower_bound: lower,
            upper_bound: upper,
            participant_count: count,
            mean_actual,
            mean_perceived,
        });

        lower = upper;
        start = end;
    }

    bins
}

/// Chart label for a bin.
pub fn quartile_label(index: usize, quartile_count: usize) -> String {
    if quartile_count == QUARTILE_LABELS.len() {
        QUARTILE_LABELS[index].to_string()
    } else {
        format!("Q{}", index + 1)
    }
}

fn empty_bin(quartile_count: usize) -> impl Fn(usize) -> QuartileBin {
    move |index| QuartileBin {
        index,
        label: quartile_label(index, quartile_count),
        lower_bound: f64::NAN,
        upper_bound: f64::NAN,
        participant_count: 0,
        mean_actual: f64::NAN,
        mean_perceived: f64::NAN,
    }
}

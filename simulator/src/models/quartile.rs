//! Quartile bin model
//!
//! One equal-frequency bin over a score axis, with the per-bin summary
//! statistics the rendering layer plots as the classic quartile chart.

use serde::{Deserialize, Serialize};

/// Display labels for the default four-bin partition
pub const QUARTILE_LABELS: [&str; 4] = ["Bottom", "2nd", "3rd", "Top"];

/// Aggregates for one equal-frequency bin
///
/// Bins are contiguous and ordered by `index` along the binned axis;
/// adjacent bins share a boundary value, and a participant sitting
/// exactly on a boundary belongs to the lower-indexed bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuartileBin {
    /// Bin position, ascending along the binned axis (0 = lowest scores)
    pub index: usize,

    /// Categorical label for chart axes ("Bottom".."Top" for 4 bins,
    /// "Q1".."Qk" otherwise)
    pub label: String,

    /// Lowest axis value covered by this bin
    pub lower_bound: f64,

    /// Highest axis value covered by this bin
    pub upper_bound: f64,

    /// Number of participants assigned to this bin
    pub participant_count: usize,

    /// Unweighted mean of `actual` over the bin; NaN when the bin is
    /// empty, so "no data" is distinguishable from "mean is zero"
    pub mean_actual: f64,

    /// Unweighted mean of `perceived` over the bin; NaN when empty
    pub mean_perceived: f64,
}

impl QuartileBin {
    /// True when no participant landed in this bin (heavy ties can starve
    /// later bins; the means are NaN in that case)
    pub fn is_empty(&self) -> bool {
        self.participant_count == 0
    }
}

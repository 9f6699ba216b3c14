use serde::{Deserialize, Serialize};

/// Options controlling angle clustering and pairwise merging.
///
/// The same value must be used for both phases within one pipeline run;
/// clustering with one tolerance and merging with another produces clusters
/// the engine no longer agrees with.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Tolerance in degrees for treating two orientations as the same track
    /// direction, both when forming clusters and when testing bridge spans.
    pub angle_tolerance_deg: f32,
    /// Maximum endpoint gap between two segments, as a fraction of their
    /// combined length, for them to still count as one broken track.
    pub max_gap_ratio: f32,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            // Defaults match the heuristics the chamber photos were
            // calibrated with.
            angle_tolerance_deg: 10.0,
            max_gap_ratio: 0.25,
        }
    }
}

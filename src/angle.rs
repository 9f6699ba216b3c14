//! Angle utilities used across the track-merging pipeline.
//!
//! All angles are signed degrees relative to the positive x axis, in the
//! range (-180, 180], matching the orientation convention of the detected
//! segments.

use nalgebra::Point2;

/// Signed angle in degrees of the directed vector `a -> b` relative to the
/// horizontal. Range (-180, 180]. Not meaningful when `a == b`; degenerate
/// segments are rejected at ingest before any angle is taken.
#[inline]
pub fn angle_between_deg(a: &Point2<f32>, b: &Point2<f32>) -> f32 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Compares two angles under a tolerance, treating a segment and its reverse
/// as the same track direction.
///
/// True iff any of:
/// - `|reference - candidate| <= tolerance`;
/// - `reference` alone lies within tolerance of the ±180° seam (a crude
///   wraparound rule: a near-seam reference matches broadly, and only the
///   FIRST argument is tested);
/// - the two angles are within tolerance of being exactly 180° apart
///   (anti-parallel, i.e. the same undirected line).
///
/// The seam rule makes this predicate asymmetric, so the argument order is
/// part of the contract: clustering passes the cluster representative as
/// `reference_deg`, the merge engine passes the candidate span's angle.
pub fn is_almost_same_angle(reference_deg: f32, candidate_deg: f32, tolerance_deg: f32) -> bool {
    let rotated_180 = if reference_deg > candidate_deg {
        ((candidate_deg + 180.0) - reference_deg).abs() <= tolerance_deg
    } else {
        ((reference_deg + 180.0) - candidate_deg).abs() <= tolerance_deg
    };
    (reference_deg - candidate_deg).abs() <= tolerance_deg
        || (reference_deg - 180.0).abs() <= tolerance_deg
        || (reference_deg + 180.0).abs() <= tolerance_deg
        || rotated_180
}

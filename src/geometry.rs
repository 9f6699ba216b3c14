//! 2D geometry primitives shared by the merge engine and its tests.

use nalgebra::Point2;

/// Euclidean distance between two points. Never negative; zero iff `a == b`.
#[inline]
pub fn distance(a: &Point2<f32>, b: &Point2<f32>) -> f32 {
    nalgebra::distance(a, b)
}

/// Strict counter-clockwise orientation of the triple `(a, b, c)`.
#[inline]
fn ccw(a: &Point2<f32>, b: &Point2<f32>, c: &Point2<f32>) -> bool {
    (b - a).perp(&(c - a)) > 0.0
}

/// Whether the finite segments `a0-a1` and `b0-b1` cross, via the standard
/// orientation sign test on the four endpoints.
///
/// Caveat: for exactly collinear overlapping segments the orientation test
/// degenerates to zero and the result is indeterminate. The detection
/// pipeline was calibrated with this behavior, so it is kept as-is rather
/// than special-cased.
pub fn segments_intersect(
    a0: &Point2<f32>,
    a1: &Point2<f32>,
    b0: &Point2<f32>,
    b1: &Point2<f32>,
) -> bool {
    ccw(a0, b0, b1) != ccw(a1, b0, b1) && ccw(a0, a1, b0) != ccw(a0, a1, b1)
}

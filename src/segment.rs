//! The track-segment entity produced by detection and by merging.

use nalgebra::Point2;
use thiserror::Error;

use crate::angle::angle_between_deg;
use crate::geometry::distance;

/// Validation failures at the ingest boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SegmentError {
    /// Both endpoints coincide, so the segment has no defined angle.
    #[error("degenerate zero-length segment at ({x}, {y}) in {filename}")]
    Degenerate { x: f32, y: f32, filename: String },
}

/// A detected or merged track candidate: a directed pair of pixel
/// coordinates tagged with the photograph it came from.
///
/// `length` and `angle_deg` are derived from the endpoints once, at
/// construction. A segment is immutable afterwards; merging two segments
/// produces a new one instead of mutating either input.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    p0: Point2<f32>,
    p1: Point2<f32>,
    filename: String,
    length: f32,
    angle_deg: f32,
}

impl Segment {
    /// Builds a segment from a raw detection, rejecting zero-length input
    /// (its angle would be undefined and would poison clustering).
    pub fn new(
        p0: Point2<f32>,
        p1: Point2<f32>,
        filename: impl Into<String>,
    ) -> Result<Self, SegmentError> {
        let filename = filename.into();
        if p0 == p1 {
            return Err(SegmentError::Degenerate {
                x: p0.x,
                y: p0.y,
                filename,
            });
        }
        Ok(Self::from_endpoints(p0, p1, filename))
    }

    /// Builds a merged segment over a span. Callers must guarantee
    /// `p0 != p1`; the merge engine does, since a longest span is at least
    /// as long as the longer of the two inputs.
    pub(crate) fn from_endpoints(p0: Point2<f32>, p1: Point2<f32>, filename: String) -> Self {
        let length = distance(&p0, &p1);
        let angle_deg = angle_between_deg(&p0, &p1);
        Self {
            p0,
            p1,
            filename,
            length,
            angle_deg,
        }
    }

    pub fn p0(&self) -> Point2<f32> {
        self.p0
    }

    pub fn p1(&self) -> Point2<f32> {
        self.p1
    }

    /// Identifier of the source photograph this segment was detected in.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Euclidean length in pixels, always positive.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Signed angle in degrees relative to the horizontal, in (-180, 180].
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_fields_follow_endpoints() {
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0), "a.jpg").unwrap();
        assert_eq!(seg.length(), 5.0);
        assert!((seg.angle_deg() - 53.13).abs() < 0.01);
        assert_eq!(seg.filename(), "a.jpg");
    }

    #[test]
    fn zero_length_segment_is_rejected() {
        let err = Segment::new(Point2::new(2.0, 3.0), Point2::new(2.0, 3.0), "a.jpg").unwrap_err();
        assert_eq!(
            err,
            SegmentError::Degenerate {
                x: 2.0,
                y: 3.0,
                filename: "a.jpg".to_string()
            }
        );
    }
}

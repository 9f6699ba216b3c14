//! Tabular record format crossing the core boundary.
//!
//! One row per raw or merged segment; the derived `angle` and `length`
//! columns are informational on egress and recomputed from the endpoints on
//! ingest, so a stale or hand-edited row cannot smuggle an inconsistent
//! angle into clustering.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::segment::{Segment, SegmentError};

/// Row shape of the `lines_unfiltered.csv` / `lines_filtered.csv` tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub angle: f32,
    pub filename: String,
    pub length: f32,
    pub p1_x: f32,
    pub p1_y: f32,
    pub p2_x: f32,
    pub p2_y: f32,
}

impl LineRecord {
    /// Validates the endpoints and rebuilds the segment entity. Derived
    /// columns in the row are ignored in favor of recomputation.
    pub fn to_segment(&self) -> Result<Segment, SegmentError> {
        Segment::new(
            Point2::new(self.p1_x, self.p1_y),
            Point2::new(self.p2_x, self.p2_y),
            self.filename.clone(),
        )
    }
}

impl From<&Segment> for LineRecord {
    fn from(segment: &Segment) -> Self {
        Self {
            angle: segment.angle_deg(),
            filename: segment.filename().to_string(),
            length: segment.length(),
            p1_x: segment.p0().x,
            p1_y: segment.p0().y,
            p2_x: segment.p1().x,
            p2_y: segment.p1().y,
        }
    }
}

/// Builds segments from raw detector output (endpoint quadruples), all
/// attached to one source photograph. Fails on the first zero-length
/// detection.
pub fn segments_from_raw(
    lines: &[(f32, f32, f32, f32)],
    filename: &str,
) -> Result<Vec<Segment>, SegmentError> {
    lines
        .iter()
        .map(|&(x1, y1, x2, y2)| Segment::new(Point2::new(x1, y1), Point2::new(x2, y2), filename))
        .collect()
}

/// Converts a batch of rows into validated segments, failing on the first
/// degenerate row.
pub fn records_to_segments(records: &[LineRecord]) -> Result<Vec<Segment>, SegmentError> {
    records.iter().map(LineRecord::to_segment).collect()
}

/// Renders segments back into rows, one per surviving segment.
pub fn segments_to_records(segments: &[Segment]) -> Vec<LineRecord> {
    segments.iter().map(LineRecord::from).collect()
}

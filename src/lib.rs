#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod io;
pub mod record;
pub mod report;
pub mod segment;
pub mod tracks;

// Lower-level building blocks, public for tools and tests.
pub mod angle;
pub mod geometry;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry points: segment entity + merge pipeline.
pub use crate::segment::{Segment, SegmentError};
pub use crate::tracks::{filter_by_image, filter_segments, MergeOptions};

// Boundary record shape and its CSV codec.
pub use crate::io::{read_records_csv, write_records_csv, CSV_HEADER};
pub use crate::record::LineRecord;

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::record::{records_to_segments, segments_from_raw, segments_to_records};
    pub use crate::{filter_by_image, filter_segments, LineRecord, MergeOptions};
    pub use crate::{Segment, SegmentError};
}

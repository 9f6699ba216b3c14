//! Clustering and pairwise merging of detected track segments.
//!
//! The detector fragments and duplicates real tracks; this module groups
//! segments by orientation and collapses each group to the minimal set of
//! lines that still spans the detections.

mod cluster;
mod merge;
mod options;

pub use cluster::{cluster_by_angle, Cluster};
pub use merge::merge_cluster;
pub use options::MergeOptions;

use rayon::prelude::*;

use crate::segment::Segment;

/// Merges the raw detections of a single photograph: clusters by angle,
/// settles every cluster, and flattens the clusters back into one sequence
/// (cluster order, then intra-cluster order). The output is never longer
/// than the input.
pub fn filter_segments(segments: Vec<Segment>, options: &MergeOptions) -> Vec<Segment> {
    cluster_by_angle(segments, options.angle_tolerance_deg)
        .into_iter()
        .flat_map(|cluster| merge_cluster(cluster.into_members(), options))
        .collect()
}

/// Merges a batch of detections spanning several photographs. Segments are
/// grouped by source filename (first-appearance order) and each group is
/// filtered independently; groups share no state, so they run in parallel.
pub fn filter_by_image(segments: Vec<Segment>, options: &MergeOptions) -> Vec<Segment> {
    let mut groups: Vec<(String, Vec<Segment>)> = Vec::new();
    for segment in segments {
        match groups.iter().position(|(name, _)| name == segment.filename()) {
            Some(idx) => groups[idx].1.push(segment),
            None => groups.push((segment.filename().to_string(), vec![segment])),
        }
    }
    groups
        .into_par_iter()
        .flat_map(|(_, members)| filter_segments(members, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32, filename: &str) -> Segment {
        Segment::new(Point2::new(x1, y1), Point2::new(x2, y2), filename).unwrap()
    }

    #[test]
    fn filter_never_grows_the_sequence() {
        let input = vec![
            seg(0.0, 0.0, 4.0, 4.0, "a.jpg"),
            seg(5.0, 5.0, 9.0, 9.0, "a.jpg"),
            seg(0.0, 10.0, 10.0, 10.0, "a.jpg"),
        ];
        let n = input.len();
        let merged = filter_segments(input, &MergeOptions::default());
        assert!(merged.len() <= n);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn filter_on_empty_input_is_empty() {
        assert!(filter_segments(Vec::new(), &MergeOptions::default()).is_empty());
    }

    #[test]
    fn batch_filter_keeps_images_independent() {
        // The two photos hold collinear fragments at the same coordinates;
        // merging must happen within each photo, never across.
        let input = vec![
            seg(0.0, 0.0, 4.0, 4.0, "a.jpg"),
            seg(0.0, 0.0, 4.0, 4.0, "b.jpg"),
            seg(5.0, 5.0, 9.0, 9.0, "a.jpg"),
            seg(5.0, 5.0, 9.0, 9.0, "b.jpg"),
        ];
        let merged = filter_by_image(input, &MergeOptions::default());
        assert_eq!(merged.len(), 2);
        let mut names: Vec<&str> = merged.iter().map(Segment::filename).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
        for seg in &merged {
            assert_eq!(seg.p0(), Point2::new(0.0, 0.0));
            assert_eq!(seg.p1(), Point2::new(9.0, 9.0));
        }
    }
}

use log::debug;
use nalgebra::Point2;

use crate::angle::{angle_between_deg, is_almost_same_angle};
use crate::geometry::distance;
use crate::segment::Segment;
use crate::tracks::MergeOptions;

/// Candidate connection between endpoints of two segments. Unlike
/// `Segment`, a span may be zero-length (two segments sharing an endpoint),
/// in which case its angle degenerates to 0° by the atan2 convention.
#[derive(Clone, Copy)]
struct Span {
    a: Point2<f32>,
    b: Point2<f32>,
    length: f32,
}

impl Span {
    fn new(a: Point2<f32>, b: Point2<f32>) -> Self {
        let length = distance(&a, &b);
        Self { a, b, length }
    }

    fn angle_deg(&self) -> f32 {
        angle_between_deg(&self.a, &self.b)
    }
}

/// Shortest connection between an endpoint of `s` and an endpoint of `t`
/// (4 candidate pairings). Ties resolve to the first candidate in the fixed
/// evaluation order.
fn shortest_span(s: &Segment, t: &Segment) -> Span {
    let candidates = [
        Span::new(s.p0(), t.p0()),
        Span::new(s.p0(), t.p1()),
        Span::new(s.p1(), t.p0()),
        Span::new(s.p1(), t.p1()),
    ];
    let mut best = 0;
    for (i, span) in candidates.iter().enumerate() {
        if span.length < candidates[best].length {
            best = i;
        }
    }
    candidates[best]
}

/// Longest span among all 6 pairings of the 4 endpoints of `s` and `t`;
/// this may be one of the segments' own spans. Ties resolve to the first
/// candidate in the fixed evaluation order.
fn longest_span(s: &Segment, t: &Segment) -> Span {
    let candidates = [
        Span::new(s.p0(), s.p1()),
        Span::new(s.p0(), t.p0()),
        Span::new(s.p0(), t.p1()),
        Span::new(s.p1(), t.p0()),
        Span::new(s.p1(), t.p1()),
        Span::new(t.p0(), t.p1()),
    ];
    let mut best = 0;
    for (i, span) in candidates.iter().enumerate() {
        if span.length > candidates[best].length {
            best = i;
        }
    }
    candidates[best]
}

/// Runs one pairwise scan over the cluster. On the first mergeable pair,
/// removes both members, appends the replacement built over their longest
/// span (filename carried from the first member) and reports `true` so the
/// caller restarts the scan on the mutated list.
fn merge_once(members: &mut Vec<Segment>, options: &MergeOptions) -> bool {
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            let (first, second) = (&members[i], &members[j]);
            let shortest = shortest_span(first, second);
            let longest = longest_span(first, second);
            let gap_limit = options.max_gap_ratio * (first.length() + second.length());

            if shortest.length > gap_limit {
                // Too far apart to be one broken track.
                continue;
            }

            let bridge_aligned = is_almost_same_angle(
                shortest.angle_deg(),
                first.angle_deg(),
                options.angle_tolerance_deg,
            );
            let merged_aligned = shortest.length < gap_limit
                && is_almost_same_angle(
                    longest.angle_deg(),
                    first.angle_deg(),
                    options.angle_tolerance_deg,
                );

            if bridge_aligned || merged_aligned {
                let filename = first.filename().to_string();
                debug!(
                    "merging segments {i} and {j} in {filename}: gap {:.2}, span {:.2}",
                    shortest.length, longest.length
                );
                members.remove(j);
                members.remove(i);
                members.push(Segment::from_endpoints(longest.a, longest.b, filename));
                return true;
            }
        }
    }
    false
}

/// Merges a cluster of same-angled segments to its fixed point: scans all
/// pairs, replaces mergeable pairs by their longest span, and repeats until
/// a full pass makes no merge. Each merge strictly reduces the member count,
/// so the loop is bounded by the cluster's original size.
///
/// Untouched members keep their relative order; replacements are appended
/// at the end as they are produced.
pub fn merge_cluster(mut members: Vec<Segment>, options: &MergeOptions) -> Vec<Segment> {
    while merge_once(&mut members, options) {}
    members
}

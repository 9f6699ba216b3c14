use log::debug;

use crate::angle::is_almost_same_angle;
use crate::segment::Segment;

/// Ordered group of segments judged to share a track orientation.
///
/// Exists only between clustering and merging within one pipeline run; the
/// driver flattens clusters back into a plain sequence afterwards.
#[derive(Clone, Debug)]
pub struct Cluster {
    representative_angle_deg: f32,
    members: Vec<Segment>,
}

impl Cluster {
    fn open(seed: Segment) -> Self {
        Self {
            representative_angle_deg: seed.angle_deg(),
            members: vec![seed],
        }
    }

    fn push(&mut self, segment: Segment) {
        // Running midpoint average: the representative drifts toward the
        // cluster's center as members arrive, so the partition depends on
        // input order.
        self.representative_angle_deg = (self.representative_angle_deg + segment.angle_deg()) / 2.0;
        self.members.push(segment);
    }

    /// Current representative orientation of the cluster in degrees.
    pub fn representative_angle_deg(&self) -> f32 {
        self.representative_angle_deg
    }

    pub fn members(&self) -> &[Segment] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Segment> {
        self.members
    }
}

/// Partitions segments into clusters of almost-equal orientation.
///
/// Each segment joins the FIRST existing cluster whose representative angle
/// matches it under `tolerance_deg` (the representative is always passed as
/// the reference argument of the angle predicate), or opens a new cluster.
/// Every input segment lands in exactly one cluster; cluster order follows
/// first appearance, member order follows input order.
pub fn cluster_by_angle(segments: Vec<Segment>, tolerance_deg: f32) -> Vec<Cluster> {
    let total = segments.len();
    let mut clusters: Vec<Cluster> = Vec::new();
    for segment in segments {
        let slot = clusters.iter().position(|cluster| {
            is_almost_same_angle(
                cluster.representative_angle_deg,
                segment.angle_deg(),
                tolerance_deg,
            )
        });
        match slot {
            Some(idx) => clusters[idx].push(segment),
            None => clusters.push(Cluster::open(segment)),
        }
    }
    debug!(
        "cluster_by_angle: {} segments -> {} clusters (tol {} deg)",
        total,
        clusters.len(),
        tolerance_deg
    );
    clusters
}

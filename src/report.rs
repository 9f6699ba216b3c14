//! Summary of one filtering run, written as a JSON report next to the CSV
//! output.

use serde::Serialize;

use crate::segment::Segment;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    pub images: Vec<ImageSummary>,
    pub total_input: usize,
    pub total_output: usize,
}

/// Per-photo line counts before and after merging.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSummary {
    pub filename: String,
    pub input_lines: usize,
    pub output_lines: usize,
}

impl FilterReport {
    /// Tallies per-image counts, image order following first appearance in
    /// the input.
    pub fn tally(input: &[Segment], output: &[Segment]) -> Self {
        let mut images: Vec<ImageSummary> = Vec::new();
        for seg in input {
            match images.iter().position(|s| s.filename == seg.filename()) {
                Some(idx) => images[idx].input_lines += 1,
                None => images.push(ImageSummary {
                    filename: seg.filename().to_string(),
                    input_lines: 1,
                    output_lines: 0,
                }),
            }
        }
        for seg in output {
            if let Some(summary) = images.iter_mut().find(|s| s.filename == seg.filename()) {
                summary.output_lines += 1;
            }
        }
        Self {
            total_input: input.len(),
            total_output: output.len(),
            images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn seg(x2: f32, filename: &str) -> Segment {
        Segment::new(Point2::new(0.0, 0.0), Point2::new(x2, 1.0), filename).unwrap()
    }

    #[test]
    fn tally_counts_per_image() {
        let input = vec![seg(1.0, "a.jpg"), seg(2.0, "b.jpg"), seg(3.0, "a.jpg")];
        let output = vec![seg(4.0, "a.jpg")];
        let report = FilterReport::tally(&input, &output);
        assert_eq!(report.total_input, 3);
        assert_eq!(report.total_output, 1);
        assert_eq!(report.images.len(), 2);
        assert_eq!(report.images[0].filename, "a.jpg");
        assert_eq!(report.images[0].input_lines, 2);
        assert_eq!(report.images[0].output_lines, 1);
        assert_eq!(report.images[1].output_lines, 0);
    }
}

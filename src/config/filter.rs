use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::tracks::MergeOptions;

/// Config for the `filter_lines` tool.
#[derive(Debug, Deserialize)]
pub struct FilterToolConfig {
    /// CSV table of raw detections (`lines_unfiltered.csv`).
    pub input: PathBuf,
    /// Destination CSV table of merged lines (`lines_filtered.csv`).
    pub output: PathBuf,
    /// Optional JSON summary of per-image counts.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    #[serde(default)]
    pub merge: MergeConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Tolerance in degrees for treating two orientations as the same track.
    pub angle_tolerance_deg: f32,
    /// Maximum endpoint gap as a fraction of the pair's combined length.
    pub max_gap_ratio: f32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        let defaults = MergeOptions::default();
        Self {
            angle_tolerance_deg: defaults.angle_tolerance_deg,
            max_gap_ratio: defaults.max_gap_ratio,
        }
    }
}

impl MergeConfig {
    pub fn to_options(&self) -> MergeOptions {
        MergeOptions {
            angle_tolerance_deg: self.angle_tolerance_deg,
            max_gap_ratio: self.max_gap_ratio,
        }
    }
}

pub fn load_config(path: &Path) -> Result<FilterToolConfig, String> {
    super::load_json_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_merge_defaults() {
        let config: FilterToolConfig = serde_json::from_str(
            r#"{"input": "lines_unfiltered.csv", "output": "lines_filtered.csv"}"#,
        )
        .unwrap();
        assert_eq!(config.merge.angle_tolerance_deg, 10.0);
        assert_eq!(config.merge.max_gap_ratio, 0.25);
        assert!(config.report_json.is_none());
    }

    #[test]
    fn merge_settings_are_tunable() {
        let config: FilterToolConfig = serde_json::from_str(
            r#"{
                "input": "in.csv",
                "output": "out.csv",
                "report_json": "report.json",
                "merge": {"angle_tolerance_deg": 7.5}
            }"#,
        )
        .unwrap();
        let options = config.merge.to_options();
        assert_eq!(options.angle_tolerance_deg, 7.5);
        assert_eq!(options.max_gap_ratio, 0.25);
    }
}

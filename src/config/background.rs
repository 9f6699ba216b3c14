use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config for the `remove_background` tool.
#[derive(Debug, Deserialize)]
pub struct BackgroundToolConfig {
    /// Aligned chamber photo to clean up.
    pub input: PathBuf,
    /// Reference background photo (same dimensions as the input).
    pub background: PathBuf,
    /// Destination for the background-free photo.
    pub output: PathBuf,
}

pub fn load_config(path: &Path) -> Result<BackgroundToolConfig, String> {
    super::load_json_config(path)
}

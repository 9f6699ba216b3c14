//! JSON configuration files for the command-line tools.

pub mod background;
pub mod filter;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn load_json_config<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

use crate::bounds::Region;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LinePlotConfig {
    /// Point pairs to join into lines.
    #[serde(default)]
    pub point_pairs: Vec<[[f64; 2]; 2]>,
    /// Homogeneous line pairs `(a, b, c)` to intersect.
    #[serde(default)]
    pub line_pairs: Vec<[[f64; 3]; 2]>,
    /// Clipping region; derived from the inputs when absent.
    #[serde(default)]
    pub region: Option<Region>,
    /// Margin added around the inputs when `region` is derived.
    #[serde(default = "default_margin")]
    pub margin: f64,
    pub output: LinePlotOutputConfig,
}

fn default_margin() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct LinePlotOutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<LinePlotConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

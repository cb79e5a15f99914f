use crate::rectify::RectifyParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct AffineRectifyConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Four corners in clockwise order, `[x, y]` pixel coordinates.
    pub corners: Vec<[f64; 2]>,
    /// Swap red and blue after loading (for BGR sources).
    #[serde(default)]
    pub bgr: bool,
    #[serde(default)]
    pub rectify: RectifyParams,
    #[serde(default)]
    pub warp: WarpConfig,
    pub output: RectifyOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WarpConfig {
    /// Largest accepted side of the rectified canvas, in pixels.
    pub max_output_px: u32,
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            max_output_px: 8192,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RectifyOutputConfig {
    #[serde(rename = "rectified_image")]
    pub rectified_image: PathBuf,
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
    /// Input image with boundary lines and corners drawn on top.
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
    /// Rectified image with the rectified boundary lines drawn on top.
    #[serde(default)]
    pub rectified_overlay_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<AffineRectifyConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub(crate) fn parse_config(data: &str) -> Result<AffineRectifyConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_sections() {
        let cfg = parse_config(
            r#"{
                "input": "board.png",
                "corners": [[0, 0], [4, 0], [5, 3], [-1, 4]],
                "output": {
                    "rectified_image": "out/rect.png",
                    "result_json": "out/result.json"
                }
            }"#,
        )
        .expect("parse");
        assert_eq!(cfg.corners.len(), 4);
        assert!(!cfg.bgr);
        assert_eq!(cfg.warp.max_output_px, 8192);
        assert_eq!(cfg.rectify.eps, RectifyParams::default().eps);
        assert!(cfg.output.overlay_image.is_none());
        assert!(cfg.output.rectified_overlay_image.is_none());
    }

    #[test]
    fn explicit_tolerance_is_read() {
        let cfg = parse_config(
            r#"{
                "input": "a.jpg",
                "corners": [[0, 0], [1, 0], [1, 1], [0, 1]],
                "bgr": true,
                "rectify": { "eps": 1e-6 },
                "warp": { "max_output_px": 512 },
                "output": {
                    "rectified_image": "r.png",
                    "result_json": "r.json",
                    "overlay_image": "o.png"
                }
            }"#,
        )
        .expect("parse");
        assert!(cfg.bgr);
        assert_eq!(cfg.rectify.eps, 1e-6);
        assert_eq!(cfg.warp.max_output_px, 512);
        assert_eq!(cfg.output.overlay_image, Some(PathBuf::from("o.png")));
    }
}

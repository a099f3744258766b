use crate::analyzer::AnalyzerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `skeleton_stages` inspection tool.
#[derive(Debug, Deserialize)]
pub struct StageToolConfig {
    /// Image analyzed by the tool.
    pub input: PathBuf,
    #[serde(default)]
    pub params: AnalyzerParams,
    #[serde(default)]
    pub output: StageOutputConfig,
}

/// Optional artifacts written after analysis; omitted entries are skipped.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StageOutputConfig {
    /// Four-panel montage (input, gradient heat, edge mask, skeleton).
    pub montage: Option<PathBuf>,
    /// Gradient magnitude as a grayscale PNG, normalized by its maximum.
    pub gradient_image: Option<PathBuf>,
    /// High-gradient mask as a black/white PNG.
    pub edge_mask_image: Option<PathBuf>,
    /// Skeleton as a black/white PNG.
    pub skeleton_image: Option<PathBuf>,
    /// Full analysis report as pretty JSON.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<StageToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_needs_only_the_input() {
        let config: StageToolConfig = serde_json::from_str(r#"{ "input": "frame.png" }"#).unwrap();
        assert_eq!(config.input, PathBuf::from("frame.png"));
        assert!(config.output.montage.is_none());
        assert_eq!(config.params.alignment.min_length, 10);
    }
}

use crate::analyzer::AnalyzerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `alignment_report` batch tool.
#[derive(Debug, Deserialize)]
pub struct BatchToolConfig {
    /// Directory scanned (non-recursively) for images to analyze.
    pub input_dir: PathBuf,
    #[serde(default)]
    pub params: AnalyzerParams,
    /// Analyze images across worker threads. Per-image results are
    /// independent, so parallelism never changes the numbers.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default)]
    pub output: BatchOutputConfig,
}

/// Optional artifacts written by the batch run.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BatchOutputConfig {
    /// Per-image summaries as one pretty-JSON array, sorted by file name.
    pub summaries_json: Option<PathBuf>,
    /// Directory receiving a four-panel montage per analyzed image.
    pub montage_dir: Option<PathBuf>,
}

fn default_parallel() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<BatchToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

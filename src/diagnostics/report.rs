use crate::diagnostics::TimingBreakdown;
use crate::image::GridPoint;
use serde::Serialize;

/// Compact per-image result returned by
/// [`AlignmentAnalyzer::process`](crate::AlignmentAnalyzer::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentSummary {
    /// Summed pixel count of every qualifying run.
    pub total_length: u64,
    /// Summed pixel count of the qualifying runs classified axis-aligned.
    pub aligned_length: u64,
    /// Aligned share as a percentage in [0, 100].
    pub aligned_ratio: f64,
    /// Set pixels in the skeleton mask.
    pub skeleton_pixels: usize,
    /// Runs produced by the extractor, including sub-threshold ones.
    pub segments_total: usize,
    /// Runs long enough to enter the totals.
    pub segments_measured: usize,
    /// Measured runs classified axis-aligned.
    pub segments_aligned: usize,
    /// Wall-clock time for the whole pipeline.
    pub latency_ms: f64,
}

/// Full report bundling the summary with a per-stage trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub summary: AlignmentSummary,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing one analyzer execution.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub gradient: GradientStats,
    pub edge_mask: MaskStats,
    pub skeleton: MaskStats,
    pub segments: SegmentStats,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Magnitude statistics of the gradient stage.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStats {
    pub max_magnitude: f32,
    pub mean_magnitude: f32,
}

/// Occupancy of a binary stage output (edge mask or skeleton).
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskStats {
    pub set_pixels: usize,
    /// Set share of the full frame, in [0, 1].
    pub density: f64,
}

/// Run census after extraction and classification.
///
/// `samples` lists only the measured runs (length at or above the minimum)
/// and keeps at most the first 512 of them in scan order; the counts stay
/// exact past the cap, so busy skeletons do not bloat serialized reports.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStats {
    pub total: usize,
    pub measured: usize,
    pub aligned: usize,
    pub discarded_short: usize,
    pub samples: Vec<SegmentSample>,
}

/// One measured run as it entered classification.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSample {
    pub first: GridPoint,
    pub last: GridPoint,
    pub length: usize,
    pub angle_deg: f64,
    pub aligned: bool,
}

/// Console line reported per analyzed image.
pub fn report_line(name: &str, aligned_ratio: f64) -> String {
    format!("Image: {name}, Aligned Ratio: {aligned_ratio:.2}%")
}

#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod config;
pub mod diagnostics;
pub mod image;

// "Expert" modules – still public, but considered unstable internals.
pub mod alignment;
pub mod angle;
pub mod edges;
pub mod render;
pub mod scan;
pub mod segments;
pub mod skeleton;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{
    measure_skeleton, AlignmentAnalyzer, AnalysisOutcome, AnalyzerParams, StageArtifacts,
};

// Classification knobs and accumulators used throughout the API.
pub use crate::alignment::{AlignmentOptions, AlignmentTotals, AngleFold};
pub use crate::edges::GradientKernel;
pub use crate::scan::ScanOrderKind;
pub use crate::skeleton::ThinningAlgorithm;

// High-level diagnostics returned by the analyzer.
pub use crate::diagnostics::{AlignmentSummary, AnalysisReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pixelmeter::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
/// let summary = analyzer.process(img);
/// println!(
///     "aligned={:.2}% latency_ms={:.3}",
///     summary.aligned_ratio, summary.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{AlignmentAnalyzer, AlignmentSummary, AnalyzerParams};
}

//! Alignment analyzer orchestrating the full measurement pipeline.
//!
//! Overview
//! - Normalizes 8-bit gray input to [0, 1] and computes Sobel/Scharr
//!   gradients.
//! - Thresholds the gradient magnitude into a high-gradient mask and thins it
//!   to a one-pixel-wide skeleton.
//! - Orders the skeleton pixels under the configured scan policy, groups them
//!   into unit-step runs, and classifies each qualifying run as axis-aligned
//!   or not.
//! - Reports summed lengths, the aligned ratio, and a per-stage trace.
//!
//! Modules
//! - [`params`] – configuration types used by the analyzer and the demo
//!   tools.
//! - `pipeline` – the main [`AlignmentAnalyzer`] implementation.
//!
//! The skeleton-only entry point [`measure_skeleton`] serves callers that
//! already hold a thinned mask and only want the measurement half.

pub mod params;
mod pipeline;

pub use params::AnalyzerParams;
pub use pipeline::{AlignmentAnalyzer, AnalysisOutcome, StageArtifacts};

use crate::alignment::{aggregate_alignment, AlignmentOptions, AlignmentTotals};
use crate::image::BinaryMask;
use crate::scan::{ScanOrder, ScanOrderKind};
use crate::segments::extract_segments;

/// Measure an existing skeleton mask without running the image pipeline.
pub fn measure_skeleton(
    mask: &BinaryMask,
    options: &AlignmentOptions,
    scan_order: ScanOrderKind,
) -> AlignmentTotals {
    let points = scan_order.order_points(mask);
    let segments = extract_segments(&points);
    aggregate_alignment(&segments, options)
}

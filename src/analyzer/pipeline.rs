//! Analyzer pipeline driving the alignment metric end-to-end.
//!
//! The [`AlignmentAnalyzer`] exposes a simple API: feed a grayscale image and
//! get the aligned-length summary, optionally with per-stage rasters and a
//! detailed trace. Internally it runs gradient computation, magnitude
//! thresholding, skeletonization, scan ordering, run extraction, and
//! classification, timing each stage.
//!
//! Typical usage:
//! ```no_run
//! use pixelmeter::{AlignmentAnalyzer, AnalyzerParams};
//! use pixelmeter::image::ImageU8;
//!
//! # fn example(gray: ImageU8) {
//! let analyzer = AlignmentAnalyzer::new(AnalyzerParams::default());
//! let summary = analyzer.process(gray);
//! println!("aligned: {:.2}%", summary.aligned_ratio);
//! # }
//! ```
use super::params::AnalyzerParams;
use crate::alignment::{aggregate_alignment, is_aligned_angle};
use crate::diagnostics::{
    AlignmentSummary, AnalysisReport, GradientStats, InputDescriptor, MaskStats, PipelineTrace,
    SegmentSample, SegmentStats, TimingBreakdown,
};
use crate::edges::{threshold_mask, GradientFilter};
use crate::image::{BinaryMask, ImageF32, ImageU8};
use crate::scan::ScanOrder;
use crate::segments::{extract_segments, RunSegment};
use crate::skeleton::Skeletonizer;
use log::debug;
use std::time::Instant;

/// Rasters produced by the pipeline stages, kept for rendering and export.
#[derive(Clone, Debug)]
pub struct StageArtifacts {
    /// Gradient magnitude before thresholding.
    pub gradient_magnitude: ImageF32,
    /// High-gradient mask after thresholding.
    pub edge_mask: BinaryMask,
    /// One-pixel-wide skeleton of the edge mask.
    pub skeleton: BinaryMask,
}

/// Full result of `process_with_stages`: the serializable report plus the
/// stage rasters.
#[derive(Clone, Debug)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub artifacts: StageArtifacts,
}

/// Analyzer orchestrating gradient, threshold, thinning, and run
/// classification stages.
pub struct AlignmentAnalyzer {
    params: AnalyzerParams,
}

impl AlignmentAnalyzer {
    /// Create an analyzer with the supplied parameters.
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Run the pipeline on a grayscale image, returning the compact summary.
    pub fn process(&self, gray: ImageU8<'_>) -> AlignmentSummary {
        self.process_with_stages(gray).report.summary
    }

    /// Run the pipeline and return the report plus every stage raster.
    pub fn process_with_stages(&self, gray: ImageU8<'_>) -> AnalysisOutcome {
        let (width, height) = (gray.w, gray.h);
        debug!("AlignmentAnalyzer::process start w={width} h={height}");
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        // The gradient stage includes the u8 -> [0, 1] normalization.
        let luma = ImageF32::from_u8_normalized(gray);
        let grad = self.params.kernel.gradients(&luma);
        let stage_start = timings.record_since("gradient", total_start);

        let edge_mask = threshold_mask(&grad.mag, self.params.magnitude_threshold);
        let stage_start = timings.record_since("threshold", stage_start);

        let skeleton = self.params.thinning.skeletonize(&edge_mask);
        let stage_start = timings.record_since("skeletonize", stage_start);

        let points = self.params.scan_order.order_points(&skeleton);
        let stage_start = timings.record_since("scan_order", stage_start);

        let segments = extract_segments(&points);
        let stage_start = timings.record_since("extract", stage_start);

        let totals = aggregate_alignment(&segments, &self.params.alignment);
        timings.record_since("aggregate", stage_start);

        let segment_stats = self.census_measured_runs(&segments);
        let segments_measured = segment_stats.measured;
        let segments_aligned = segment_stats.aligned;

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1e3;
        debug!(
            "AlignmentAnalyzer::process done ratio={:.2}% runs={} measured={} total_ms={:.3}",
            totals.aligned_ratio(),
            segment_stats.total,
            segment_stats.measured,
            timings.total_ms
        );

        let summary = AlignmentSummary {
            total_length: totals.total_length,
            aligned_length: totals.aligned_length,
            aligned_ratio: totals.aligned_ratio(),
            skeleton_pixels: skeleton.count_set(),
            segments_total: segment_stats.total,
            segments_measured,
            segments_aligned,
            latency_ms: timings.total_ms,
        };
        let trace = PipelineTrace {
            input: InputDescriptor { width, height },
            timings,
            gradient: GradientStats {
                max_magnitude: grad.mag.max_value(),
                mean_magnitude: grad.mag.mean_value(),
            },
            edge_mask: MaskStats {
                set_pixels: edge_mask.count_set(),
                density: edge_mask.density(),
            },
            skeleton: MaskStats {
                set_pixels: skeleton.count_set(),
                density: skeleton.density(),
            },
            segments: segment_stats,
        };
        AnalysisOutcome {
            report: AnalysisReport { summary, trace },
            artifacts: StageArtifacts {
                gradient_magnitude: grad.mag,
                edge_mask,
                skeleton,
            },
        }
    }

    /// Census of the runs that entered the totals, as classification saw
    /// them. At most `sample_cap` runs are kept as samples; the counts
    /// cover every measured run.
    fn census_measured_runs(&self, segments: &[RunSegment]) -> SegmentStats {
        let sample_cap = 512usize;
        let options = &self.params.alignment;
        let mut samples = Vec::new();
        let mut measured = 0usize;
        let mut aligned_count = 0usize;
        for segment in segments {
            if segment.len() < options.min_length {
                continue;
            }
            measured += 1;
            let angle_deg = segment.direction_angle_deg();
            let aligned = is_aligned_angle(angle_deg, options);
            if aligned {
                aligned_count += 1;
            }
            if samples.len() < sample_cap {
                samples.push(SegmentSample {
                    first: segment.first(),
                    last: segment.last(),
                    length: segment.len(),
                    angle_deg,
                    aligned,
                });
            }
        }
        SegmentStats {
            total: segments.len(),
            measured,
            aligned: aligned_count,
            discarded_short: segments.len() - measured,
            samples,
        }
    }
}

//! Diagnostics data model exposed by the analyzer and the demo tools.
//!
//! [`AnalysisReport`] is the main entry point returned by
//! `AlignmentAnalyzer::process_with_stages`, bundling the headline
//! [`AlignmentSummary`] with a [`PipelineTrace`] describing every stage the
//! pipeline executed.

pub mod report;
pub mod timing;

pub use report::{
    report_line, AlignmentSummary, AnalysisReport, GradientStats, InputDescriptor, MaskStats,
    PipelineTrace, SegmentSample, SegmentStats,
};
pub use timing::{StageTiming, TimingBreakdown};

//! Parameter types configuring the analyzer stages.
//!
//! Defaults reproduce the reference metric: Sobel gradients on normalized
//! gray values, a 0.2 magnitude threshold, Zhang-Suen thinning, row-major
//! scan order, and the 10-pixel / 2-degree classification rule.

use crate::alignment::AlignmentOptions;
use crate::edges::GradientKernel;
use crate::scan::ScanOrderKind;
use crate::skeleton::ThinningAlgorithm;
use serde::{Deserialize, Serialize};

/// Analyzer-wide parameters controlling the pipeline stages.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// Derivative kernel for the gradient stage.
    pub kernel: GradientKernel,
    /// Gradient magnitude above which a pixel enters the edge mask, in
    /// normalized units (input gray values span [0, 1]).
    pub magnitude_threshold: f32,
    /// Thinning algorithm reducing the edge mask to a skeleton.
    pub thinning: ThinningAlgorithm,
    /// Ordering policy feeding the run extractor.
    pub scan_order: ScanOrderKind,
    /// Run length filter and angle classification options.
    pub alignment: AlignmentOptions,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            kernel: GradientKernel::Sobel,
            magnitude_threshold: 0.2,
            thinning: ThinningAlgorithm::ZhangSuen,
            scan_order: ScanOrderKind::RowMajor,
            alignment: AlignmentOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::AngleFold;

    #[test]
    fn params_deserialize_with_partial_overrides() {
        let params: AnalyzerParams = serde_json::from_str(
            r#"{
                "kernel": "scharr",
                "alignment": { "min_length": 4, "fold": "quarter" }
            }"#,
        )
        .unwrap();
        assert_eq!(params.kernel, GradientKernel::Scharr);
        assert_eq!(params.alignment.min_length, 4);
        assert_eq!(params.alignment.fold, AngleFold::Quarter);
        // Everything else keeps its default.
        assert_eq!(params.scan_order, ScanOrderKind::RowMajor);
        assert!((params.magnitude_threshold - 0.2).abs() < 1e-6);
        assert!((params.alignment.angle_margin_deg - 2.0).abs() < 1e-12);
    }
}

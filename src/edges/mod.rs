//! Edge processing: image gradients and magnitude thresholding.
//!
//! This module provides the upstream half of the analysis pipeline:
//!
//! - Gradient computation (Sobel/Scharr) returning `gx`, `gy`, and magnitude.
//! - Binary thresholding of the magnitude into a high-gradient mask, which
//!   the skeletonizer thins before measurement.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).
//! - Keep the operator choice behind [`GradientFilter`] so callers depend on
//!   the capability, not a specific kernel.

pub mod grad;
pub mod threshold;

pub use grad::{scharr_gradients, sobel_gradients, Grad, GradientKernel};
pub use threshold::threshold_mask;

use crate::image::ImageF32;

/// Capability interface for gradient operators.
pub trait GradientFilter {
    /// Compute per-pixel gradients of a single-channel float image.
    fn gradients(&self, l: &ImageF32) -> Grad;
}

impl GradientFilter for GradientKernel {
    fn gradients(&self, l: &ImageF32) -> Grad {
        match *self {
            Self::Sobel => sobel_gradients(l),
            Self::Scharr => scharr_gradients(l),
        }
    }
}

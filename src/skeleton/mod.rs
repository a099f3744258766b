//! Skeletonization: reduce a thick binary mask to its one-pixel-wide midline.
//!
//! The measurement stage only relies on the [`Skeletonizer`] contract (a
//! topologically thin mask comes out), not on a particular algorithm, so the
//! algorithm is selected through [`ThinningAlgorithm`].

pub mod thinning;

pub use thinning::zhang_suen_thin;

use crate::image::BinaryMask;
use serde::{Deserialize, Serialize};

/// Selects which thinning algorithm reduces the mask.
///
/// Ships with [`ZhangSuen`](Self::ZhangSuen) only; further variants (e.g.
/// Guo-Hall) can be added without changing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThinningAlgorithm {
    /// Classic two-subpass Zhang-Suen thinning.
    #[default]
    ZhangSuen,
}

/// Capability interface for skeletonization strategies.
pub trait Skeletonizer {
    /// Thin `mask` to a one-pixel-wide skeleton.
    fn skeletonize(&self, mask: &BinaryMask) -> BinaryMask;
}

impl Skeletonizer for ThinningAlgorithm {
    fn skeletonize(&self, mask: &BinaryMask) -> BinaryMask {
        match *self {
            Self::ZhangSuen => zhang_suen_thin(mask),
        }
    }
}

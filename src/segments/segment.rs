use crate::angle::displacement_angle_deg;
use crate::image::GridPoint;
use serde::{Deserialize, Serialize};

/// Maximal run of consecutive scan-order points connected by single-pixel
/// axis-aligned steps.
///
/// Invariant: never empty. The extractor seeds every run with a point before
/// growing or emitting it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSegment {
    points: Vec<GridPoint>,
}

impl RunSegment {
    /// Wrap an ordered, non-empty point list.
    pub fn new(points: Vec<GridPoint>) -> Self {
        debug_assert!(!points.is_empty(), "run segments carry at least one point");
        Self { points }
    }

    /// Number of pixels in the run.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point in scan order.
    pub fn first(&self) -> GridPoint {
        self.points[0]
    }

    /// Last point in scan order.
    pub fn last(&self) -> GridPoint {
        self.points[self.points.len() - 1]
    }

    /// All points in scan order.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// End-to-end displacement `(dx, dy)` between the first and last point.
    ///
    /// This is endpoint displacement, not path length. The two coincide for
    /// monotone runs, which is what the extractor's step rule produces.
    pub fn displacement(&self) -> (i64, i64) {
        let first = self.first();
        let last = self.last();
        (
            i64::from(last.x) - i64::from(first.x),
            i64::from(last.y) - i64::from(first.y),
        )
    }

    /// Unsigned direction angle of the run in degrees, in [0, 180].
    ///
    /// A single-point run has zero displacement and reports 0 (horizontal).
    pub fn direction_angle_deg(&self) -> f64 {
        let (dx, dy) = self.displacement();
        displacement_angle_deg(dx, dy)
    }
}

//! Run classification and length aggregation.
//!
//! Each run long enough to qualify contributes its pixel count to
//! `total_length`; runs whose direction angle sits within the margin of the
//! horizontal or vertical axis also contribute to `aligned_length`. The
//! aligned ratio derives from the two accumulators and is the crate's
//! headline metric.
use crate::angle::{fold_to_quarter, within_margin_of_axes};
use crate::segments::RunSegment;
use serde::{Deserialize, Serialize};

/// How direction angles are treated before the margin comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleFold {
    /// Keep the angle in [0, 180]: a leftward near-180 run does not count as
    /// horizontal. This asymmetry is the metric's reference behavior, and
    /// under the row-major scan order it is unobservable because run
    /// displacements never point leftward.
    #[default]
    Preserve,
    /// Fold onto [0, 90] via `min(angle, 180 - angle)` so opposite travel
    /// directions along the same line classify identically.
    Quarter,
}

/// Parameters for run classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentOptions {
    /// Minimum pixel count for a run to enter the totals. Zero admits every
    /// run.
    pub min_length: usize,
    /// Inclusive tolerance around 0 and 90 degrees.
    pub angle_margin_deg: f64,
    /// Angle treatment applied before the margin test.
    pub fold: AngleFold,
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            min_length: 10,
            angle_margin_deg: 2.0,
            fold: AngleFold::Preserve,
        }
    }
}

/// Length accumulators over qualifying runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentTotals {
    /// Summed pixel count of every qualifying run.
    pub total_length: u64,
    /// Summed pixel count of the qualifying runs classified axis-aligned.
    pub aligned_length: u64,
}

impl AlignmentTotals {
    /// Aligned share as a percentage in [0, 100]. Zero when nothing
    /// qualified, so an empty skeleton reports 0 rather than dividing by
    /// zero.
    pub fn aligned_ratio(&self) -> f64 {
        if self.total_length == 0 {
            0.0
        } else {
            self.aligned_length as f64 / self.total_length as f64 * 100.0
        }
    }
}

/// Classify a direction angle (degrees, in [0, 180]) under `options`.
pub fn is_aligned_angle(angle_deg: f64, options: &AlignmentOptions) -> bool {
    let angle = match options.fold {
        AngleFold::Preserve => angle_deg,
        AngleFold::Quarter => fold_to_quarter(angle_deg),
    };
    within_margin_of_axes(angle, options.angle_margin_deg)
}

/// Accumulate qualifying run lengths into alignment totals.
///
/// Runs shorter than `options.min_length` contribute to neither accumulator.
/// `aligned_length <= total_length` holds for every input.
pub fn aggregate_alignment(segments: &[RunSegment], options: &AlignmentOptions) -> AlignmentTotals {
    let mut totals = AlignmentTotals::default();
    for segment in segments {
        if segment.len() < options.min_length {
            continue;
        }
        let length = segment.len() as u64;
        totals.total_length += length;
        if is_aligned_angle(segment.direction_angle_deg(), options) {
            totals.aligned_length += length;
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GridPoint;

    fn horizontal_run(y: u32, len: u32) -> RunSegment {
        RunSegment::new((0..len).map(|x| GridPoint::new(x, y)).collect())
    }

    fn leftward_run(y: u32, len: u32) -> RunSegment {
        RunSegment::new((0..len).rev().map(|x| GridPoint::new(x, y)).collect())
    }

    /// Staircase alternating east/south unit steps, far from both axes.
    fn staircase_run(len: u32) -> RunSegment {
        let points = (0..len)
            .map(|i| GridPoint::new(i.div_ceil(2), i / 2))
            .collect();
        RunSegment::new(points)
    }

    #[test]
    fn empty_input_aggregates_to_zero() {
        let totals = aggregate_alignment(&[], &AlignmentOptions::default());
        assert_eq!(totals, AlignmentTotals::default());
        assert_eq!(totals.aligned_ratio(), 0.0);
    }

    #[test]
    fn straight_run_is_fully_aligned() {
        let totals = aggregate_alignment(&[horizontal_run(0, 10)], &AlignmentOptions::default());
        assert_eq!(totals.total_length, 10);
        assert_eq!(totals.aligned_length, 10);
        assert_eq!(totals.aligned_ratio(), 100.0);
    }

    #[test]
    fn short_run_contributes_to_neither_accumulator() {
        let totals = aggregate_alignment(&[horizontal_run(0, 5)], &AlignmentOptions::default());
        assert_eq!(totals, AlignmentTotals::default());
    }

    #[test]
    fn mixed_runs_split_the_ratio() {
        let runs = [horizontal_run(0, 10), staircase_run(10)];
        let totals = aggregate_alignment(&runs, &AlignmentOptions::default());
        assert_eq!(totals.total_length, 20);
        assert_eq!(totals.aligned_length, 10);
        assert_eq!(totals.aligned_ratio(), 50.0);
    }

    #[test]
    fn totals_are_sums_over_qualifying_runs() {
        let runs = [
            horizontal_run(0, 12),
            horizontal_run(2, 3),
            staircase_run(15),
        ];
        let options = AlignmentOptions {
            min_length: 10,
            ..AlignmentOptions::default()
        };
        let totals = aggregate_alignment(&runs, &options);
        assert_eq!(totals.total_length, 12 + 15);
        assert_eq!(totals.aligned_length, 12);
        assert!(totals.aligned_length <= totals.total_length);
    }

    #[test]
    fn zero_min_length_admits_every_run() {
        let runs = [
            RunSegment::new(vec![GridPoint::new(0, 0)]),
            RunSegment::new(vec![GridPoint::new(5, 5)]),
        ];
        let options = AlignmentOptions {
            min_length: 0,
            ..AlignmentOptions::default()
        };
        let totals = aggregate_alignment(&runs, &options);
        // Single-point runs have zero displacement, which classifies as
        // horizontal.
        assert_eq!(totals.total_length, 2);
        assert_eq!(totals.aligned_length, 2);
    }

    #[test]
    fn leftward_run_depends_on_fold_mode() {
        let runs = [leftward_run(0, 10)];
        let preserve = aggregate_alignment(&runs, &AlignmentOptions::default());
        assert_eq!(preserve.aligned_length, 0);
        assert_eq!(preserve.total_length, 10);

        let folded = aggregate_alignment(
            &runs,
            &AlignmentOptions {
                fold: AngleFold::Quarter,
                ..AlignmentOptions::default()
            },
        );
        assert_eq!(folded.aligned_length, 10);
    }

    #[test]
    fn wide_margin_boundary_is_inclusive() {
        // The 45-degree staircase computes a hair above 45.0 in floating
        // point, so the wide margin is 46 rather than exactly 45.
        let options = AlignmentOptions {
            angle_margin_deg: 46.0,
            ..AlignmentOptions::default()
        };
        let totals = aggregate_alignment(&[staircase_run(11)], &options);
        assert_eq!(totals.aligned_length, totals.total_length);

        let narrow = AlignmentOptions {
            angle_margin_deg: 30.0,
            ..AlignmentOptions::default()
        };
        let totals = aggregate_alignment(&[staircase_run(11)], &narrow);
        assert_eq!(totals.aligned_length, 0);
    }
}

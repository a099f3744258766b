//! Run extraction over ordered skeleton points.
//!
//! This module turns the scan-ordered pixel list of a skeleton mask into
//! maximal straight runs:
//!
//! - A run grows while each next point is exactly one pixel away from its
//!   predecessor along a single axis (a horizontal or vertical unit step).
//!   Any other gap, including diagonal steps, closes the run.
//! - Every input point belongs to exactly one run, runs preserve input
//!   order, and the trailing run is emitted explicitly so the last structure
//!   in scan order is never dropped.
//! - Runs are pure groupings: no length filtering or angle classification
//!   happens here. The alignment aggregator applies both.
//!
//! Notes
//! - Under the default row-major scan order, consecutive points are adjacent
//!   only when the underlying structure happens to align with the scan
//!   direction. Diagonal or curved branches therefore fragment into many
//!   short runs, and parallel structures sharing rows interleave into
//!   length-1 runs. That fragmentation is part of the metric's definition,
//!   not an artifact to fix here; the connectivity scan order exists for
//!   callers who want physical paths instead.
//!
//! Complexity: one pass over the point list, O(n) time and output size.

mod extractor;
mod segment;

pub use extractor::extract_segments;
pub use segment::RunSegment;

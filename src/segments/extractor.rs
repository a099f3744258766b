use super::RunSegment;
use crate::image::GridPoint;

/// True when `b` is exactly one pixel from `a` along a single axis.
#[inline]
fn unit_step(a: GridPoint, b: GridPoint) -> bool {
    let dx = (i64::from(b.x) - i64::from(a.x)).abs();
    let dy = (i64::from(b.y) - i64::from(a.y)).abs();
    (dy == 0 && dx == 1) || (dx == 0 && dy == 1)
}

/// Group an ordered point sequence into maximal unit-step runs.
///
/// The first point seeds the current run. Each subsequent point either
/// extends the run (when it is a single horizontal or vertical pixel step
/// from its predecessor) or closes it and seeds the next one. The trailing
/// run is always emitted, so every input point lands in exactly one segment
/// and segments preserve input order.
///
/// Runs below any length threshold are still returned; filtering is a
/// classification concern and happens in the aggregator.
pub fn extract_segments(points: &[GridPoint]) -> Vec<RunSegment> {
    let mut segments = Vec::new();
    let Some((&first, rest)) = points.split_first() else {
        return segments;
    };
    let mut current = vec![first];
    let mut prev = first;
    for &point in rest {
        if unit_step(prev, point) {
            current.push(point);
        } else {
            segments.push(RunSegment::new(std::mem::take(&mut current)));
            current.push(point);
        }
        prev = point;
    }
    segments.push(RunSegment::new(current));
    segments
}

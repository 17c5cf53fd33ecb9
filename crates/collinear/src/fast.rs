use itertools::Itertools;
use log::{debug, trace};

use crate::{
    natural_order_snapshot, CollinearDetector, LineSegment, Point, Result, MIN_COLLINEAR_POINTS,
};

/// Finds every maximal line by sorting around each point in turn.
///
/// Around a pivot, points on a common line through the pivot share a slope, so after sorting by
/// slope they form a contiguous run.  Every line is found once per point on it, but only reported
/// when the pivot is the lowest point on the line.  Runs in `O(n^2 log n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastCollinearPoints {
    segments: Vec<LineSegment>,
}

impl CollinearDetector for FastCollinearPoints {
    fn try_new(points: &[Point]) -> Result<Self> {
        let snapshot = natural_order_snapshot(points)?;
        let mut around_pivot = Vec::with_capacity(snapshot.len());

        let segments = snapshot
            .iter()
            .flat_map(|&pivot| lines_starting_at_pivot(pivot, &snapshot, &mut around_pivot))
            .collect_vec();

        debug!(
            "slope sort over {} points found {} segments",
            snapshot.len(),
            segments.len()
        );
        Ok(FastCollinearPoints { segments })
    }

    fn segments(&self) -> &[LineSegment] {
        &self.segments
    }
}

/// Lines of at least [`MIN_COLLINEAR_POINTS`] points whose lowest point is `pivot`.
///
/// `scratch` is refilled from `snapshot` every call, so no ordering leaks from one pivot to the
/// next.
fn lines_starting_at_pivot(
    pivot: Point,
    snapshot: &[Point],
    scratch: &mut Vec<Point>,
) -> Vec<LineSegment> {
    scratch.clear();
    scratch.extend(snapshot.iter().copied().filter(|&p| p != pivot));

    let slope_order = pivot.slope_order();
    slope_order.sort(scratch);

    let runs = scratch.iter().copied().group_by(|p| slope_order.key(p));
    let mut lines = vec![];
    for (_, run) in &runs {
        if let Some(line) = line_from_run(pivot, &run.collect_vec()) {
            trace!("line through {} found from pivot {}", line, pivot);
            lines.push(line);
        }
    }
    lines
}

/// `run` holds the points sharing one slope to `pivot`, in no particular spatial order.
fn line_from_run(pivot: Point, run: &[Point]) -> Option<LineSegment> {
    if run.len() + 1 < MIN_COLLINEAR_POINTS {
        return None;
    }
    let (lowest, highest) = run.iter().minmax().into_option()?;
    // Otherwise this line gets reported from its actual lowest point
    if pivot > *lowest {
        return None;
    }
    Some(LineSegment::from_two_points(pivot, *highest))
}

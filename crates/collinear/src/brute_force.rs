use itertools::Itertools;
use log::{debug, trace};

use crate::{natural_order_snapshot, CollinearDetector, LineSegment, Point, Result};

/// Checks every combination of four points.
///
/// Each collinear quadruple gives one segment from its lowest to its highest point.  Quadruples
/// are never merged, so five or more points on one line show up as several overlapping segments
/// rather than a single maximal one.  Use [`crate::FastCollinearPoints`] when that matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteCollinearPoints {
    segments: Vec<LineSegment>,
}

impl CollinearDetector for BruteCollinearPoints {
    fn try_new(points: &[Point]) -> Result<Self> {
        let sorted = natural_order_snapshot(points)?;

        // Combinations come out in index order, so `p` is the lowest point and `s` the highest
        let segments = sorted
            .iter()
            .tuple_combinations()
            .filter(|&(p, q, r, s)| {
                let slope = p.slope_to(*q);
                slope == p.slope_to(*r) && slope == p.slope_to(*s)
            })
            .map(|(&p, _, _, &s)| LineSegment::from_two_points(p, s))
            .inspect(|segment| trace!("collinear quadruple spanning {}", segment))
            .collect_vec();

        debug!(
            "brute force search over {} points found {} segments",
            sorted.len(),
            segments.len()
        );
        Ok(BruteCollinearPoints { segments })
    }

    fn segments(&self) -> &[LineSegment] {
        &self.segments
    }
}

use std::cmp::Ordering;

use getset::CopyGetters;
use ordered_float::OrderedFloat;

use crate::Point;

/// Slopes compare exactly.  Two directions only share a key if the computed slopes are bit-for-bit
/// equal, which is the grouping collinearity detection relies on.
pub type SlopeKey = OrderedFloat<f64>;

/// Compares points by the slope they make with a fixed origin.
///
/// The order is total, with the origin itself (slope `-inf`) first and vertical neighbors
/// (slope `+inf`) last.  Points with equal slope are left in no particular order relative to
/// each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, CopyGetters)]
#[get_copy = "pub"]
pub struct SlopeOrder {
    origin: Point,
}

impl SlopeOrder {
    pub fn new(origin: Point) -> Self {
        SlopeOrder { origin }
    }
    pub fn key(&self, target: &Point) -> SlopeKey {
        OrderedFloat(self.origin.slope_to(*target))
    }
    pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
    pub fn sort(&self, points: &mut [Point]) {
        points.sort_by_cached_key(|p| self.key(p));
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_compare_by_slope() {
        let order = Point::new(0, 0).slope_order();
        assert_eq!(order.origin(), Point::new(0, 0));
        assert_eq!(
            order.compare(&Point::new(1, 1), &Point::new(1, 2)),
            Ordering::Less
        );
        assert_eq!(
            order.compare(&Point::new(2, 2), &Point::new(-3, -3)),
            Ordering::Equal,
            "opposite sides of the origin on the same line"
        );
        assert_eq!(
            order.compare(&Point::new(0, 5), &Point::new(100, 99)),
            Ordering::Greater,
            "vertical is steepest"
        );
    }

    #[test]
    fn test_sort_puts_infinities_at_the_ends() {
        let origin = Point::new(2, 2);
        let mut points = [(2, 7), (5, 2), (2, 2), (3, 1), (4, 4), (0, 3)]
            .map(Point::from)
            .to_vec();
        origin.slope_order().sort(&mut points);

        let slopes = points.iter().map(|p| origin.slope_to(*p)).collect_vec();
        assert_eq!(slopes, vec![f64::NEG_INFINITY, -1.0, -0.5, 0.0, 1.0, f64::INFINITY]);
    }

    #[test]
    fn test_order_is_transitive_over_mixed_slopes() {
        let order = Point::new(0, 0).slope_order();
        let points = [(1, -4), (3, 1), (0, 0), (0, 9), (-2, 0), (7, 7), (-1, 3)].map(Point::from);
        for (a, b, c) in points.iter().tuple_combinations() {
            if order.compare(a, b).is_le() && order.compare(b, c).is_le() {
                assert!(order.compare(a, c).is_le(), "{} {} {}", a, b, c);
            }
        }
    }
}

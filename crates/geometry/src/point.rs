use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use derive_more::From;
use euclid::default::{Point2D, Vector2D};
use euclid::point2;

use crate::SlopeOrder;

pub type IPoint = Point2D<i32>;
type WideStep = Vector2D<i64>;

/// An immutable point on the integer grid.
///
/// Points are ordered bottom to top, then left to right: `a < b` when `a` is lower
/// than `b`, or level with `b` and to its left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, From)]
pub struct Point(IPoint);

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point(point2(x, y))
    }
    pub fn x(&self) -> i32 {
        self.0.x
    }
    pub fn y(&self) -> i32 {
        self.0.y
    }
    pub fn to_ipoint(&self) -> IPoint {
        self.0
    }

    // Widened so that differences between extreme coordinates can't overflow
    fn step_to(&self, that: Point) -> WideStep {
        that.0.cast::<i64>() - self.0.cast::<i64>()
    }

    /// Slope of the line from `self` to `that`.
    ///
    /// - `f64::NEG_INFINITY` if the points are equal
    /// - `+0.0` if the line is horizontal
    /// - `f64::INFINITY` if the line is vertical
    /// - `dy / dx` otherwise
    ///
    /// Swapping the two points negates both `dy` and `dx`, so the result is exactly the same in
    /// either direction.
    pub fn slope_to(&self, that: Point) -> f64 {
        if *self == that {
            return f64::NEG_INFINITY;
        }
        let step = self.step_to(that);
        if step.x == 0 {
            f64::INFINITY
        } else if step.y == 0 {
            0.0
        } else {
            step.y as f64 / step.x as f64
        }
    }

    /// Orders other points by the slope they make with this one.
    pub fn slope_order(&self) -> SlopeOrder {
        SlopeOrder::new(*self)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for IPoint {
    fn from(value: Point) -> Self {
        value.0
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y()
            .cmp(&other.y())
            .then_with(|| self.x().cmp(&other.x()))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

use std::fmt::{Display, Formatter};

use getset::CopyGetters;

use crate::Point;

/// A segment between two distinct points.  The endpoints are kept in the order given.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, CopyGetters)]
#[get_copy = "pub"]
pub struct LineSegment {
    start: Point,
    end: Point,
}

impl LineSegment {
    pub fn try_from_two_points(start: Point, end: Point) -> Result<Self, String> {
        if start == end {
            Err(format!("Points are equal: {}, {}", start, end))
        } else {
            Ok(LineSegment { start, end })
        }
    }
    /// Panics if the points are equal
    pub fn from_two_points(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self::try_from_two_points(start.into(), end.into()).unwrap()
    }
    pub fn endpoints(&self) -> [Point; 2] {
        [self.start, self.end]
    }
    pub fn reversed(&self) -> Self {
        LineSegment {
            start: self.end,
            end: self.start,
        }
    }
}

impl Display for LineSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

use crate::{require_points, LineSegment, Point, Result};

/// A point set that has already been searched for lines.
///
/// All the work happens on construction.  A detector that was built successfully only answers
/// questions about the segments it found.
pub trait CollinearDetector: Sized {
    // entrypoint
    fn try_new(points: &[Point]) -> Result<Self>;

    fn segments(&self) -> &[LineSegment];

    fn number_of_segments(&self) -> usize {
        self.segments().len()
    }
    /// For callers holding a point set that may be absent or have gaps
    fn try_from_nullable_points(points: Option<&[Option<Point>]>) -> Result<Self> {
        Self::try_new(&require_points(points)?)
    }
}

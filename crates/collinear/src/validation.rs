use itertools::Itertools;

use crate::{CollinearError, Point, Result};

/// Checks that the point set and every point in it are present.
pub fn require_points(points: Option<&[Option<Point>]>) -> Result<Vec<Point>> {
    points
        .ok_or(CollinearError::NullInput)?
        .iter()
        .map(|p| p.ok_or(CollinearError::NullInput))
        .collect()
}

/// Sorts a copy of `points` into natural order, failing if any point appears twice.
///
/// The returned vector is never modified afterwards.  Anything that needs a different order
/// works on its own copy.
pub fn natural_order_snapshot(points: &[Point]) -> Result<Vec<Point>> {
    let sorted = points.iter().copied().sorted().collect_vec();
    if let Some((&point, _)) = sorted.iter().tuple_windows().find(|(a, b)| a == b) {
        return Err(CollinearError::DuplicatePoint { point });
    }
    Ok(sorted)
}

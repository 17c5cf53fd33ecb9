//! Finds every line through four or more points of a point set.
//!
//! Two detectors are provided.  [`BruteCollinearPoints`] checks every combination of four points
//! and is only practical for small inputs.  [`FastCollinearPoints`] sorts the other points by
//! slope around each point in turn and reports each maximal line exactly once.

use geometry::pub_mod_and_use;

pub use geometry::{LineSegment, Point};

pub_mod_and_use!(error, validation, detector, brute_force, fast, config, point_file);

/// Fewest points that count as a line
pub const MIN_COLLINEAR_POINTS: usize = 4;

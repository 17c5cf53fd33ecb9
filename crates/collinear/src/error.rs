//! Error types for collinear point detection

use geometry::Point;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollinearError {
    #[error("Point set or one of its points is missing")]
    NullInput,

    #[error("Point set contains {point} more than once")]
    DuplicatePoint { point: Point },

    #[error("Point file is empty, expected a point count")]
    MissingPointCount,

    #[error("Invalid token '{token}' in point file: {reason}")]
    InvalidToken { token: String, reason: String },

    #[error("Point file declares {expected} points but only has coordinates for {found}")]
    MissingCoordinate { expected: usize, found: usize },

    #[error("Failed to read point file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CollinearError>;

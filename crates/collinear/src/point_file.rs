//! Reading point sets from text.
//!
//! The format is a sequence of whitespace separated integers.  The first is the number of points,
//! followed by an `x y` pair for each point.  Anything after the last pair is ignored.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::{CollinearError, Point, Result};

fn parse_token<T>(token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse().map_err(|e: T::Err| CollinearError::InvalidToken {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

pub fn read_points(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let expected: usize = parse_token(tokens.next().ok_or(CollinearError::MissingPointCount)?)?;

    let mut coordinates = tokens.map(parse_token::<i32>);
    (0..expected)
        .map(|found| -> Result<Point> {
            match (coordinates.next(), coordinates.next()) {
                (Some(x), Some(y)) => Ok(Point::new(x?, y?)),
                _ => Err(CollinearError::MissingCoordinate { expected, found }),
            }
        })
        .collect()
}

pub fn read_points_from_path(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let points = read_points(&std::fs::read_to_string(path)?)?;
    debug!("read {} points from {}", points.len(), path.display());
    Ok(points)
}

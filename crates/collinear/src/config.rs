use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    BruteCollinearPoints, CollinearDetector, FastCollinearPoints, LineSegment, Point, Result,
};

/// Which search to run over a point set
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum DetectorKind {
    Brute,
    #[default]
    Fast,
}

impl DetectorKind {
    pub fn detect(&self, points: &[Point]) -> Result<Vec<LineSegment>> {
        Ok(match self {
            DetectorKind::Brute => BruteCollinearPoints::try_new(points)?.segments().to_vec(),
            DetectorKind::Fast => FastCollinearPoints::try_new(points)?.segments().to_vec(),
        })
    }
}

pub fn detect(kind: DetectorKind, points: &[Point]) -> Result<Vec<LineSegment>> {
    kind.detect(points)
}

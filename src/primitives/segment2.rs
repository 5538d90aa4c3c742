//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment from `start` to `end`.
///
/// The direction matters for parametrization (`point_at(0) == start`) but
/// not for whether two segments intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector `end - start`.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns `start + t * (end - start)`.
    ///
    /// Values of `t` outside `[0, 1]` extrapolate beyond the segment.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start + self.direction() * t
    }

    /// Returns the segment with `start` and `end` swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl<F: Float, P: Into<Point2<F>>> From<(P, P)> for Segment2<F> {
    fn from((start, end): (P, P)) -> Self {
        Self::new(start.into(), end.into())
    }
}

impl<F: Float, P: Into<Point2<F>>> From<[P; 2]> for Segment2<F> {
    fn from([start, end]: [P; 2]) -> Self {
        Self::new(start.into(), end.into())
    }
}

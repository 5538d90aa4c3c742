//! 2D circle type.

use super::Point2;
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use polyprim::{Circle2, Point2};
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains(Point2::new(0.5, 0.0)));
/// assert!(!circle.contains(Point2::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn diameter(&self) -> F {
        self.radius + self.radius
    }

    /// Returns true if the point is inside or on the circle.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Signed distance from the circle boundary (negative inside).
    #[inline]
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        self.center.distance(point) - self.radius
    }
}

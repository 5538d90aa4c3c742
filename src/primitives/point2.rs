//! 2D point type for positions.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point representing a position.
///
/// Generic over floating-point types (`f32` or `f64`). Raw coordinate pairs
/// convert into points with `From`, so every function taking
/// `impl Into<Point2<F>>` accepts `(x, y)`, `[x, y]`, a `Vec2` or a `Point2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the origin `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Normalizes a sequence of heterogeneous point representations.
    ///
    /// # Example
    ///
    /// ```
    /// use polyprim::{Point2, Vec2};
    ///
    /// let pts: Vec<Point2<f64>> = Point2::convert([(0.0, 1.0), (2.0, 3.0)]);
    /// assert_eq!(pts[1], Point2::new(2.0, 3.0));
    ///
    /// let from_vecs: Vec<Point2<f64>> = Point2::convert(vec![Vec2::new(1.0, 1.0)]);
    /// assert_eq!(from_vecs[0], Point2::new(1.0, 1.0));
    /// ```
    pub fn convert<P, I>(points: I) -> Vec<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Self>,
    {
        points.into_iter().map(Into::into).collect()
    }

    /// Returns the position vector of this point (its offset from the origin).
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, F::from(0.5).unwrap())
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// 2D cross product of `self` and `other` measured from `origin`.
    ///
    /// Equivalent to `(self - origin).cross(other - origin)`. Pass
    /// [`Point2::origin`] to cross the position vectors themselves.
    #[inline]
    pub fn cross(self, other: Self, origin: Self) -> F {
        (self - origin).cross(other - origin)
    }

    /// Dot product of the position vectors.
    #[inline]
    pub fn dot(self, direction: Vec2<F>) -> F {
        self.to_vec().dot(direction)
    }

    /// Rounds both coordinates to `decimals` decimal places.
    ///
    /// Halfway cases round away from zero.
    #[inline]
    pub fn round_to(self, decimals: i32) -> Self {
        Self {
            x: round_to(self.x, decimals),
            y: round_to(self.y, decimals),
        }
    }
}

pub(crate) fn round_to<F: Float>(value: F, decimals: i32) -> F {
    let scale = F::from(10.0).unwrap().powi(decimals);
    (value * scale).round() / scale
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    #[inline]
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<Vec2<F>> for Point2<F> {
    #[inline]
    fn from(v: Vec2<F>) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convert_mixed_sources() {
        let from_tuples: Vec<Point2<f64>> = Point2::convert([(1.0, 2.0), (3.0, 4.0)]);
        let from_arrays: Vec<Point2<f64>> = Point2::convert([[1.0, 2.0], [3.0, 4.0]]);
        let from_vecs: Vec<Point2<f64>> =
            Point2::convert([Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);

        assert_eq!(from_tuples, from_arrays);
        assert_eq!(from_tuples, from_vecs);
        assert_eq!(from_tuples[1].x, 3.0);
    }

    #[test]
    fn test_sub_gives_vector() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        let d = b - a;
        assert_eq!(d, Vec2::new(3.0, 4.0));
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_add_vector() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        assert_eq!(p + Vec2::new(0.5, -1.0), Point2::new(1.5, 1.0));
        assert_eq!(p - Vec2::new(1.0, 2.0), Point2::origin());
    }

    #[test]
    fn test_midpoint() {
        let m = Point2::new(0.0_f64, 0.0).midpoint(Point2::new(10.0, -4.0));
        assert_eq!(m, Point2::new(5.0, -2.0));
    }

    #[test]
    fn test_cross_default_origin() {
        let a: Point2<f64> = Point2::new(1.0, 0.0);
        let b = Point2::new(0.0, 1.0);
        assert_eq!(a.cross(b, Point2::origin()), 1.0);
        assert_eq!(b.cross(a, Point2::origin()), -1.0);
    }

    #[test]
    fn test_cross_explicit_origin() {
        let a: Point2<f64> = Point2::new(2.0, 1.0);
        let b = Point2::new(1.0, 2.0);
        let o = Point2::new(1.0, 1.0);
        // (1, 0) x (0, 1)
        assert_eq!(a.cross(b, o), 1.0);
    }

    #[test]
    fn test_round_to() {
        let p: Point2<f64> = Point2::new(1.23456, -2.71828);
        let r = p.round_to(2);
        assert_relative_eq!(r.x, 1.23, epsilon = 1e-12);
        assert_relative_eq!(r.y, -2.72, epsilon = 1e-12);

        let whole = Point2::new(0.5_f64, 1.49).round_to(0);
        assert_eq!(whole, Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_f32_support() {
        let p: Point2<f32> = (1.0_f32, 2.0_f32).into();
        assert_eq!(p.x, 1.0);
        assert_eq!(p.round_to(1), Point2::new(1.0, 2.0));
    }
}

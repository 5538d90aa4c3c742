//! Core polygon type and vertex-sequence predicates.

use crate::bounds::{bounding_box, center, corners};
use crate::error::Result;
use crate::primitives::Point2;
use num_traits::Float;

/// Winding order of a polygon, measured in a y-up frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero signed area (fewer than 3 vertices, or all collinear).
    Degenerate,
}

/// A polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Self-intersection is not checked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<F> {
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Builds a polygon from any point representation.
    pub fn from_points<P, I>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point2<F>>,
    {
        Self::new(Point2::convert(points))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Signed area via the shoelace formula; positive for counter-clockwise.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    pub fn winding(&self) -> Winding {
        polygon_winding(&self.vertices)
    }

    /// Reverses the vertex order if the polygon is counter-clockwise, so it
    /// satisfies the winding [`is_convex`] expects.
    pub fn ensure_clockwise(&mut self) {
        if self.winding() == Winding::CounterClockwise {
            self.vertices.reverse();
        }
    }

    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// See [`bounding_box`].
    pub fn bounding_box(&self) -> Result<(Point2<F>, Point2<F>)> {
        bounding_box(&self.vertices)
    }

    /// See [`corners`].
    pub fn corners(&self) -> Result<(Point2<F>, Point2<F>)> {
        corners(&self.vertices)
    }

    /// See [`center`].
    pub fn center(&self) -> Result<Point2<F>> {
        center(&self.vertices)
    }

    /// See [`is_convex`].
    pub fn is_convex(&self) -> bool {
        is_convex(&self.vertices)
    }

    /// See [`is_collinear`].
    pub fn is_collinear(&self) -> bool {
        is_collinear(&self.vertices)
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for counter-clockwise winding, negative for clockwise. Zero for
/// fewer than 3 vertices.
pub fn polygon_signed_area<F, P>(vertices: &[P]) -> F
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    let n = vertices.len();
    if n < 3 {
        return F::zero();
    }

    let twice_area = (0..n).fold(F::zero(), |acc, i| {
        let a: Point2<F> = vertices[i].into();
        let b: Point2<F> = vertices[(i + 1) % n].into();
        acc + a.cross(b, Point2::origin())
    });

    twice_area / F::from(2.0).unwrap()
}

/// Classifies the winding order of a polygon by the sign of its area.
pub fn polygon_winding<F, P>(vertices: &[P]) -> Winding
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    let area = polygon_signed_area(vertices);
    if area > F::zero() {
        Winding::CounterClockwise
    } else if area < F::zero() {
        Winding::Clockwise
    } else {
        Winding::Degenerate
    }
}

/// Tests whether a polygon is convex under a fixed winding convention.
///
/// At every vertex `v` with neighbours `prev` and `next`, the cross product
/// `(prev - v) x (next - v)` must be non-negative. That holds at every vertex
/// of a convex polygon listed **clockwise** in a y-up frame (equivalently,
/// counter-clockwise on a y-down screen). A convex polygon listed the other
/// way reports `false`; the winding is not detected. Use
/// [`Polygon::ensure_clockwise`] to normalize first.
///
/// Triangles are always convex. Fewer than 3 vertices do not form a polygon
/// and report `false`. Collinear vertices (zero cross product) are allowed.
///
/// # Example
///
/// ```
/// use polyprim::polygon::is_convex;
///
/// let clockwise = [(0.0_f64, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
/// assert!(is_convex(&clockwise));
///
/// let dented = [(0.0_f64, 0.0), (0.0, 2.0), (1.0, 1.0), (2.0, 2.0), (2.0, 0.0)];
/// assert!(!is_convex(&dented));
/// ```
pub fn is_convex<F, P>(polygon: &[P]) -> bool
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    let n = polygon.len();
    if n < 3 {
        tracing::debug!(vertices = n, "convexity test needs at least 3 vertices");
        return false;
    }
    if n == 3 {
        return true;
    }

    let polygon: Vec<Point2<F>> = Point2::convert(polygon.iter().copied());
    for (i, &vertex) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % n];
        let prev = polygon[(i + n - 1) % n];

        if prev.cross(next, vertex) < F::zero() {
            tracing::trace!(vertex = i, "turn direction flips");
            return false;
        }
    }

    true
}

/// Tests whether each point is collinear with the origin and its successor.
///
/// For every cyclic pair `(p[i], p[(i + 1) % n])` the cross product of the
/// two position vectors must be exactly zero. This is narrower than general
/// n-point collinearity: points on a common line that misses the origin,
/// such as `(0, 1)` and `(1, 1)`, report `false`.
///
/// Empty and single-point inputs report `true`.
///
/// # Example
///
/// ```
/// use polyprim::polygon::is_collinear;
///
/// assert!(is_collinear(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]));
/// assert!(!is_collinear(&[(1.0_f64, 0.0), (0.0, 1.0)]));
/// ```
pub fn is_collinear<F, P>(points: &[P]) -> bool
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    let n = points.len();
    (0..n).all(|i| {
        let p: Point2<F> = points[i].into();
        let q: Point2<F> = points[(i + 1) % n].into();
        p.cross(q, Point2::origin()) == F::zero()
    })
}

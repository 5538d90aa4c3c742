//! Axis-aligned bounding box.

use crate::error::{GeomError, Result};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2<F> {
    /// Bottom-left corner (smallest x and y values).
    pub min: Point2<F>,
    /// Top-right corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the size as a vector (width, height).
    #[inline]
    pub fn size(self) -> Vec2<F> {
        self.max - self.min
    }

    /// Returns `min + (max - min) / 2`.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min + self.size() / F::from(2.0).unwrap()
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns `true` if the point lies inside or on the boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Computes the axis-aligned bounding box of a polygon.
///
/// Returns `(bottom_left, top_right)` where `bottom_left = (min x, min y)` and
/// `top_right = (max x, max y)`, taken independently over all vertices.
/// Any non-empty input is accepted, including a single point.
///
/// # Errors
///
/// [`GeomError::EmptyInput`] if `polygon` has no vertices.
///
/// # Example
///
/// ```
/// use polyprim::{bounding_box, Point2};
///
/// let (bl, tr) = bounding_box(&[(1.0, 2.0), (3.0, 1.0), (4.0, 3.0)]).unwrap();
/// assert_eq!(bl, Point2::new(1.0, 1.0));
/// assert_eq!(tr, Point2::new(4.0, 3.0));
/// ```
pub fn bounding_box<F, P>(polygon: &[P]) -> Result<(Point2<F>, Point2<F>)>
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    let aabb = aabb_of(polygon)?;
    Ok((aabb.min, aabb.max))
}

/// Computes the center of a polygon's axis-aligned bounding box.
///
/// This is the box midpoint, not the area centroid.
///
/// # Errors
///
/// [`GeomError::EmptyInput`] if `polygon` has no vertices.
pub fn center<F, P>(polygon: &[P]) -> Result<Point2<F>>
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    Ok(aabb_of(polygon)?.center())
}

fn aabb_of<F, P>(polygon: &[P]) -> Result<Aabb2<F>>
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    Aabb2::from_points(polygon.iter().map(|&p| p.into())).ok_or_else(|| {
        tracing::debug!("bounding box requested for an empty polygon");
        GeomError::EmptyInput
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min, Point2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));
        assert_eq!(aabb.width(), 7.0);
        assert_eq!(aabb.height(), 6.0);
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Aabb2::from_points(points).is_none());
    }

    #[test]
    fn test_bounding_box_is_axis_aligned_not_vertices() {
        // Diamond: neither corner of the box is a vertex.
        let diamond = [(1.0, 0.0), (2.0, 1.0), (1.0, 2.0), (0.0, 1.0)];
        let (bl, tr) = bounding_box(&diamond).unwrap();
        assert_eq!(bl, Point2::new(0.0, 0.0));
        assert_eq!(tr, Point2::new(2.0, 2.0));
    }

    #[test]
    fn test_bounding_box_single_point() {
        let (bl, tr) = bounding_box(&[[3.0_f64, -2.0]]).unwrap();
        assert_eq!(bl, tr);
        assert_eq!(bl, Point2::new(3.0, -2.0));
    }

    #[test]
    fn test_bounding_box_empty() {
        let empty: [Point2<f64>; 0] = [];
        assert_eq!(bounding_box(&empty), Err(GeomError::EmptyInput));
        assert_eq!(center(&empty), Err(GeomError::EmptyInput));
    }

    #[test]
    fn test_center() {
        let poly = [(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (1.0, 3.0)];
        assert_eq!(center(&poly).unwrap(), Point2::new(2.0, 1.5));
    }

    #[test]
    fn test_center_f32() {
        let poly: [Point2<f32>; 2] = [Point2::new(-1.0, -1.0), Point2::new(1.0, 3.0)];
        assert_eq!(center(&poly).unwrap(), Point2::new(0.0, 1.0));
    }

    fn polygon_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((-1e3..1e3, -1e3..1e3), 1..32)
    }

    proptest! {
        #[test]
        fn prop_box_contains_every_vertex(poly in polygon_strategy()) {
            let (bl, tr) = bounding_box(&poly).unwrap();
            for &(x, y) in &poly {
                prop_assert!(bl.x <= x && x <= tr.x);
                prop_assert!(bl.y <= y && y <= tr.y);
            }
        }

        #[test]
        fn prop_center_inside_box(poly in polygon_strategy()) {
            let (bl, tr) = bounding_box(&poly).unwrap();
            let c = center(&poly).unwrap();
            prop_assert!(Aabb2::new(bl, tr).contains_point(c));
        }
    }
}

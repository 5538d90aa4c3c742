//! Extremal vertices along the `x + y` diagonal.

use crate::error::{GeomError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// Picks the vertices minimizing and maximizing `x + y`.
///
/// Returns `(bottom_left, top_right)`. Unlike [`bounding_box`](super::bounding_box),
/// both results are actual vertices of the polygon, which makes this a cheap
/// approximation of its lower-left and upper-right corners.
///
/// Ties go to the vertex that appears first in `polygon`, for both the minimum
/// and the maximum.
///
/// # Errors
///
/// [`GeomError::EmptyInput`] if `polygon` has no vertices.
///
/// # Example
///
/// ```
/// use polyprim::{corners, Point2};
///
/// let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// let (bl, tr): (Point2<f64>, Point2<f64>) = corners(&square).unwrap();
/// assert_eq!(bl, Point2::new(0.0, 0.0));
/// assert_eq!(tr, Point2::new(1.0, 1.0));
/// ```
pub fn corners<F, P>(polygon: &[P]) -> Result<(Point2<F>, Point2<F>)>
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    let mut iter = polygon.iter().map(|&p| p.into());
    let first: Point2<F> = iter.next().ok_or_else(|| {
        tracing::debug!("corners requested for an empty polygon");
        GeomError::EmptyInput
    })?;

    let diagonal = |p: Point2<F>| p.x + p.y;
    let (mut low, mut high) = (first, first);
    for p in iter {
        // Strict comparisons keep the earliest vertex on ties.
        if diagonal(p) < diagonal(low) {
            low = p;
        }
        if diagonal(p) > diagonal(high) {
            high = p;
        }
    }

    Ok((low, high))
}

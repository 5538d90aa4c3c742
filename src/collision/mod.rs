//! Support mapping for Minkowski-difference (GJK-style) algorithms.
//!
//! The support point of `A - B` along a direction `d` is the furthest point of
//! `A` along `d` minus the furthest point of `B` along `-d`. It is the building
//! block a GJK loop uses to grow its simplex; the loop itself is not part of
//! this crate.
//!
//! # Example
//!
//! ```
//! use polyprim::collision::support;
//! use polyprim::Vec2;
//!
//! let a = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! let b = [(3.0, 0.0), (4.0, 0.0), (4.0, 1.0), (3.0, 1.0)];
//!
//! let s = support(&a, &b, Vec2::new(1.0, 0.0)).unwrap();
//! // Rightmost of `a` minus leftmost of `b`.
//! assert_eq!(s, Vec2::new(-2.0, 0.0));
//! ```

use crate::error::{GeomError, Result};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Returns the vertex of `shape` with the largest dot product with `direction`.
///
/// Ties go to the vertex that appears first in `shape`. Returns `None` for an
/// empty shape.
pub fn furthest_point<F, P>(shape: &[P], direction: Vec2<F>) -> Option<Point2<F>>
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    let mut iter = shape.iter().map(|&p| p.into());
    let first: Point2<F> = iter.next()?;

    let mut best = first;
    let mut best_dot = first.dot(direction);
    for p in iter {
        let dot = p.dot(direction);
        if dot > best_dot {
            best = p;
            best_dot = dot;
        }
    }

    Some(best)
}

/// Computes the support point of the Minkowski difference `shape1 - shape2`
/// along `direction`.
///
/// # Errors
///
/// [`GeomError::EmptyInput`] if either shape has no vertices.
pub fn support<F, P, Q>(shape1: &[P], shape2: &[Q], direction: Vec2<F>) -> Result<Vec2<F>>
where
    F: Float,
    P: Into<Point2<F>> + Copy,
    Q: Into<Point2<F>> + Copy,
{
    let (Some(a), Some(b)) = (
        furthest_point(shape1, direction),
        furthest_point(shape2, -direction),
    ) else {
        tracing::debug!(
            shape1 = shape1.len(),
            shape2 = shape2.len(),
            "support point requested for an empty shape"
        );
        return Err(GeomError::EmptyInput);
    };

    Ok(a - b)
}

//! Intersection of two line segments.
//!
//! Each segment is parametrized as `start + t * (end - start)` with `t` in
//! `[0, 1]`, and the 2x2 system is solved with 2D cross products (Cramer's
//! rule).
//!
//! Parallel segments never intersect here, even when they are collinear and
//! overlap: the determinant test is exact and overlapping ranges are not
//! reported. Callers that need overlap detection must handle collinear input
//! themselves.
//!
//! # Example
//!
//! ```
//! use polyprim::intersect::intersect;
//! use polyprim::Point2;
//!
//! let hit = intersect([(0.0, 0.0), (2.0, 2.0)], [(0.0, 2.0), (2.0, 0.0)]);
//! assert_eq!(hit, Some(Point2::new(1.0, 1.0)));
//!
//! let parallel = intersect([(0.0, 0.0), (1.0, 0.0)], [(0.0, 1.0), (1.0, 1.0)]);
//! assert_eq!(parallel, None);
//! ```

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Number of decimal places [`intersect`] rounds its result to.
///
/// Rounded results can be compared for equality across calls. Halfway cases
/// round away from zero (`0.125` becomes `0.13`), not to the nearest even
/// digit.
pub const INTERSECTION_DECIMALS: i32 = 2;

/// Finds the point where two segments cross, rounded to
/// [`INTERSECTION_DECIMALS`] decimal places.
///
/// Accepts segments as [`Segment2`], `[p, q]` arrays or `(p, q)` tuples of
/// anything convertible into a [`Point2`].
///
/// Returns `None` if the segments are parallel (including collinear overlap)
/// or if the crossing lies outside either segment. Endpoints count as part of
/// the segment.
///
/// Rounding uses [`Float::round`], so a coordinate exactly halfway between two
/// rounded values moves away from zero: `0.125` becomes `0.13` and `-0.125`
/// becomes `-0.13`. Banker's rounding would give `0.12`.
#[inline]
pub fn intersect<F, S1, S2>(line1: S1, line2: S2) -> Option<Point2<F>>
where
    F: Float,
    S1: Into<Segment2<F>>,
    S2: Into<Segment2<F>>,
{
    intersect_rounded(line1, line2, INTERSECTION_DECIMALS)
}

/// Like [`intersect`], rounding to `decimals` decimal places instead.
pub fn intersect_rounded<F, S1, S2>(line1: S1, line2: S2, decimals: i32) -> Option<Point2<F>>
where
    F: Float,
    S1: Into<Segment2<F>>,
    S2: Into<Segment2<F>>,
{
    let line1 = line1.into();
    let (t1, _) = intersect_params(line1, line2)?;
    Some(line1.point_at(t1).round_to(decimals))
}

/// Solves for the parameters `(t1, t2)` at which two segments cross.
///
/// `t1` is measured along `line1` and `t2` along `line2`. Both lie in
/// `[0, 1]` whenever a value is returned. The point itself is
/// `line1.point_at(t1)`, unrounded.
pub fn intersect_params<F, S1, S2>(line1: S1, line2: S2) -> Option<(F, F)>
where
    F: Float,
    S1: Into<Segment2<F>>,
    S2: Into<Segment2<F>>,
{
    let line1 = line1.into();
    let line2 = line2.into();

    let d1 = line1.direction();
    let d2 = line2.direction();
    let determinant = d1.cross(d2);
    if determinant == F::zero() {
        tracing::trace!("segments are parallel");
        return None;
    }

    let offset = line2.start - line1.start;
    let t1 = offset.cross(d2) / determinant;
    let t2 = offset.cross(d1) / determinant;

    let unit = F::zero()..=F::one();
    if unit.contains(&t1) && unit.contains(&t2) {
        Some((t1, t2))
    } else {
        tracing::trace!("segment lines cross outside the segments");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Vec2;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_crossing_diagonals() {
        let hit = intersect([(0.0_f64, 0.0), (2.0, 2.0)], [(0.0, 2.0), (2.0, 0.0)]);
        assert_eq!(hit, Some(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_parallel_is_none() {
        let hit = intersect([(0.0_f64, 0.0), (1.0, 0.0)], [(0.0, 1.0), (1.0, 1.0)]);
        assert_eq!(hit, None);
    }

    #[test]
    fn test_collinear_overlap_is_none() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let s2 = Segment2::from_coords(5.0, 0.0, 15.0, 0.0);
        assert_eq!(intersect(s1, s2), None);
    }

    #[test]
    fn test_t_junction_at_endpoint() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let s2 = Segment2::from_coords(5.0, 0.0, 5.0, 5.0);
        assert_eq!(intersect(s1, s2), Some(Point2::new(5.0, 0.0)));
    }

    #[test]
    fn test_shared_endpoint() {
        let hit = intersect([(0.0_f64, 0.0), (5.0, 5.0)], [(5.0, 5.0), (10.0, 0.0)]);
        assert_eq!(hit, Some(Point2::new(5.0, 5.0)));
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        let hit = intersect([(0.0_f64, 0.0), (4.0, 4.0)], [(6.0, 4.0), (10.0, 0.0)]);
        assert_eq!(hit, None);
    }

    #[test]
    fn test_result_is_rounded() {
        // Lines cross at (1/3, 1/3).
        let hit = intersect([(0.0_f64, 0.0), (1.0, 1.0)], [(0.0, 0.5), (1.0, 0.0)]).unwrap();
        assert_eq!(hit, Point2::new(0.33, 0.33));

        let finer =
            intersect_rounded([(0.0_f64, 0.0), (1.0, 1.0)], [(0.0, 0.5), (1.0, 0.0)], 4).unwrap();
        assert_relative_eq!(finer.x, 0.3333, epsilon = 1e-12);
    }

    #[test]
    fn test_halfway_rounds_away_from_zero() {
        // Lines cross at exactly (0.125, 0.125).
        let hit = intersect([(0.0_f64, 0.0), (1.0, 1.0)], [(0.0, 0.25), (0.25, 0.0)]);
        assert_eq!(hit, Some(Point2::new(0.13, 0.13)));

        let hit = intersect([(0.0_f64, 0.0), (-1.0, -1.0)], [(0.0, -0.25), (-0.25, 0.0)]);
        assert_eq!(hit, Some(Point2::new(-0.13, -0.13)));
    }

    #[test]
    fn test_params() {
        let (t1, t2) =
            intersect_params([(0.0_f64, 0.0), (4.0, 0.0)], [(1.0, -1.0), (1.0, 3.0)]).unwrap();
        assert_relative_eq!(t1, 0.25, epsilon = 1e-12);
        assert_relative_eq!(t2, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_mixed_point_representations() {
        let line1 = (Point2::new(0.0_f64, 0.0), Point2::new(2.0, 2.0));
        let line2 = [Vec2::new(0.0, 2.0), Vec2::new(2.0, 0.0)];
        assert_eq!(intersect(line1, line2), Some(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_degenerate_segment_is_none() {
        let hit = intersect([(1.0_f64, 1.0), (1.0, 1.0)], [(0.0, 0.0), (2.0, 2.0)]);
        assert_eq!(hit, None);
    }

    fn coord() -> impl Strategy<Value = (f64, f64)> {
        (-50.0..50.0, -50.0..50.0)
    }

    proptest! {
        #[test]
        fn prop_existence_is_symmetric(a in coord(), b in coord(), c in coord(), d in coord()) {
            let forward = intersect([a, b], [c, d]);
            let backward = intersect([c, d], [a, b]);
            prop_assert_eq!(forward.is_some(), backward.is_some());
            if let (Some(p), Some(q)) = (forward, backward) {
                prop_assert!((p.x - q.x).abs() <= 0.0100001);
                prop_assert!((p.y - q.y).abs() <= 0.0100001);
            }
        }
    }
}

//! Triangle angles and circumcircles.
//!
//! The circumcenter is the barycentric combination of the vertices weighted by
//! `sin(2 * angle)` at each vertex. Evaluating those weights from angles
//! cancels badly on thin triangles, so the same point is computed in closed
//! form from the two edges leaving the vertex opposite the longest edge. Both
//! edges are short there, which keeps the result accurate until the triangle
//! is too flat for its area to be resolved at all.
//!
//! # Example
//!
//! ```
//! use polyprim::triangle::circumcircle;
//!
//! let circle = circumcircle(&[(0.0_f64, 0.0), (4.0, 0.0), (0.0, 4.0)]).unwrap();
//! assert!((circle.center.x - 2.0).abs() < 1e-12);
//! assert!((circle.center.y - 2.0).abs() < 1e-12);
//! assert!((circle.radius - 8.0_f64.sqrt()).abs() < 1e-12);
//! ```

use crate::error::{GeomError, Result};
use crate::primitives::{Circle2, Point2, Vec2};
use num_traits::Float;

/// Computes the interior angle at `vertex` subtended by `a` and `b`.
///
/// Returns radians in `[0, pi]`. Returns `0` if either ray has zero length.
/// Uses `atan2` of the cross and dot products, which stays accurate near `0`
/// and `pi` where `acos` of a normalized dot product does not.
///
/// ```
/// use polyprim::triangle::interior_angle;
/// use polyprim::Point2;
///
/// let angle = interior_angle(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// );
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[inline]
pub fn interior_angle<F: Float>(vertex: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    let u = a - vertex;
    let v = b - vertex;
    u.cross(v).abs().atan2(u.dot(v))
}

/// Computes the circumcircle (center and radius) of a triangle.
///
/// The radius follows the law of sines, `|A - B| / (2 sin C)`, taken at the
/// vertex `C` opposite the longest edge `AB`.
///
/// # Errors
///
/// - [`GeomError::VertexCount`] unless `triangle` has exactly 3 points.
/// - [`GeomError::DegenerateTriangle`] if the vertices are collinear,
///   coincident, or so close to collinear that twice the area is within
///   `sqrt(epsilon)` of the rounding error of the products it is computed
///   from. The check runs before any division, so the error is reported
///   instead of an infinite, NaN or inaccurate center.
pub fn circumcircle<F, P>(triangle: &[P]) -> Result<Circle2<F>>
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    let frame = PivotFrame::new(triangle)?;
    let center = frame.center()?;

    let sin_pivot = frame.cross.abs() / (frame.u.magnitude() * frame.v.magnitude());
    let radius = (frame.v - frame.u).magnitude() / (F::from(2.0).unwrap() * sin_pivot);
    if !radius.is_finite() {
        tracing::debug!("circumradius is not finite");
        return Err(GeomError::DegenerateTriangle);
    }

    Ok(Circle2::new(center, radius))
}

/// Computes only the circumcenter of a triangle.
///
/// # Errors
///
/// Same as [`circumcircle`].
pub fn circumcenter<F, P>(triangle: &[P]) -> Result<Point2<F>>
where
    F: Float,
    P: Into<Point2<F>> + Copy,
{
    PivotFrame::new(triangle)?.center()
}

/// A triangle seen from the vertex opposite its longest edge.
struct PivotFrame<F> {
    pivot: Point2<F>,
    u: Vec2<F>,
    v: Vec2<F>,
    /// `u x v`, twice the signed area.
    cross: F,
}

impl<F: Float> PivotFrame<F> {
    fn new<P>(triangle: &[P]) -> Result<Self>
    where
        P: Into<Point2<F>> + Copy,
    {
        let &[a, b, c] = triangle else {
            tracing::debug!(found = triangle.len(), "circumcircle needs exactly 3 vertices");
            return Err(GeomError::VertexCount {
                expected: 3,
                found: triangle.len(),
            });
        };
        let (a, b, c): (Point2<F>, Point2<F>, Point2<F>) = (a.into(), b.into(), c.into());

        let bc = b.distance_squared(c);
        let ca = c.distance_squared(a);
        let ab = a.distance_squared(b);
        // Cyclic rotation keeps the winding; ties keep the earlier vertex.
        let [pivot, q, r] = if bc >= ca && bc >= ab {
            [a, b, c]
        } else if ca >= ab {
            [b, c, a]
        } else {
            [c, a, b]
        };

        let u = q - pivot;
        let v = r - pivot;
        let cross = u.cross(v);
        let terms = (u.x * v.y).abs() + (u.y * v.x).abs();
        if !(cross.abs() > F::epsilon().sqrt() * terms) {
            tracing::debug!("triangle vertices are collinear");
            return Err(GeomError::DegenerateTriangle);
        }

        Ok(Self { pivot, u, v, cross })
    }

    /// Intersection of the perpendicular bisectors of `u` and `v`.
    fn center(&self) -> Result<Point2<F>> {
        let (u, v) = (self.u, self.v);
        let uu = u.magnitude_squared();
        let vv = v.magnitude_squared();
        let offset = Vec2::new(v.y * uu - u.y * vv, u.x * vv - v.x * uu)
            / (F::from(2.0).unwrap() * self.cross);

        let center = self.pivot + offset;
        if !(center.x.is_finite() && center.y.is_finite()) {
            tracing::debug!("circumcenter is not finite");
            return Err(GeomError::DegenerateTriangle);
        }

        Ok(center)
    }
}

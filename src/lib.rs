//! polyprim - Small 2D geometry primitives
//!
//! Bounding boxes, corner extraction, triangle circumcircles, segment
//! intersection, GJK support points, and convexity and collinearity tests.
//! Every function is pure and generic over `f32` and `f64`. Inputs are taken
//! as anything convertible into [`Point2`], so raw `(x, y)` tuples, `[x, y]`
//! arrays and [`Vec2`] values can be mixed freely.
//!
//! Inputs that break a precondition (an empty polygon, a triangle without
//! exactly three vertices, collinear triangle vertices) yield a [`GeomError`].
//! Outcomes that are normal, such as two segments that do not cross, are
//! `None`.
//!
//! # Example
//!
//! ```
//! use polyprim::{bounding_box, circumcircle, intersect, Point2};
//!
//! let triangle = [(0.0_f64, 0.0), (4.0, 0.0), (0.0, 4.0)];
//!
//! let (bl, tr) = bounding_box(&triangle).unwrap();
//! assert_eq!((bl, tr), (Point2::new(0.0, 0.0), Point2::new(4.0, 4.0)));
//!
//! let circle = circumcircle(&triangle).unwrap();
//! assert!((circle.radius - 2.828).abs() < 1e-3);
//!
//! assert_eq!(
//!     intersect([(0.0, 0.0), (2.0, 2.0)], [(0.0, 2.0), (2.0, 0.0)]),
//!     Some(Point2::new(1.0, 1.0)),
//! );
//! ```

pub mod bounds;
pub mod collision;
pub mod error;
pub mod intersect;
pub mod polygon;
pub mod primitives;
pub mod triangle;

pub use bounds::{bounding_box, center, corners, Aabb2};
pub use collision::{furthest_point, support};
pub use error::{GeomError, Result};
pub use intersect::{intersect, intersect_params, intersect_rounded, INTERSECTION_DECIMALS};
pub use polygon::{is_collinear, is_convex, Polygon, Winding};
pub use primitives::{Circle2, Point2, Segment2, Vec2};
pub use triangle::{circumcenter, circumcircle, interior_angle};

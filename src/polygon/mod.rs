//! Polygon-level predicates and the owning [`Polygon`] type.
//!
//! The free functions take any slice of values convertible into
//! [`Point2`](crate::Point2), so raw `(x, y)` tuples work directly:
//!
//! ```
//! use polyprim::polygon::{is_convex, Polygon, Winding};
//!
//! let mut square = Polygon::from_points([(0.0_f64, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! assert_eq!(square.winding(), Winding::CounterClockwise);
//! assert!(!is_convex(&square.vertices));
//!
//! square.ensure_clockwise();
//! assert!(square.is_convex());
//! ```

mod core;

pub use self::core::{
    is_collinear, is_convex, polygon_signed_area, polygon_winding, Polygon, Winding,
};

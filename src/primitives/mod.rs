//! Floating-point geometric value types.
//!
//! [`Point2`] is a position and [`Vec2`] an offset; subtracting two points
//! yields a vector. Raw `(x, y)` tuples and `[x, y]` arrays convert into
//! either with `From`.

mod circle2;
mod point2;
mod segment2;
mod vec2;

pub use circle2::Circle2;
pub use point2::Point2;
pub use segment2::Segment2;
pub use vec2::Vec2;

//! Bounding boxes and extremal corners of point sets.

mod aabb;
mod corner;

pub use aabb::{bounding_box, center, Aabb2};
pub use corner::corners;

//! Error types for polyprim operations.

use thiserror::Error;

/// Errors raised when an input violates a precondition or is degenerate.
///
/// Outcomes that are expected in normal use, such as two segments that do not
/// cross, are modelled with `Option` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// The point sequence was empty.
    #[error("empty input: at least one point is required")]
    EmptyInput,

    /// The point sequence had the wrong number of vertices.
    #[error("expected {expected} vertices, found {found}")]
    VertexCount {
        /// Number of vertices the operation requires.
        expected: usize,
        /// Number of vertices supplied.
        found: usize,
    },

    /// The triangle's vertices are collinear or coincident.
    #[error("degenerate triangle: vertices are collinear")]
    DegenerateTriangle,
}

/// Result alias used throughout the crate.
pub type Result<T, E = GeomError> = std::result::Result<T, E>;

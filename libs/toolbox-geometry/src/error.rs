//! # Error Types
//!
//! Error types for selection queries and mesh measurement.
//!
//! ## Error Policy
//!
//! - Every query over an empty selection returns [`GeometryError::EmptySelection`]
//! - No query substitutes a zero vector for a missing result
//! - Errors carry the counts or indices needed for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during geometry queries.
///
/// ## Example
///
/// ```rust
/// use toolbox_geometry::{centroid, GeometryError};
///
/// assert_eq!(centroid(&[]), Err(GeometryError::EmptySelection));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Nothing is selected.
    #[error("No selection: at least one element must be selected")]
    EmptySelection,

    /// The selection has too few points for the query.
    #[error("Selection too small: need {required} points, found {found}")]
    DegenerateSelection {
        /// Minimum number of points the query needs
        required: usize,
        /// Number of points supplied
        found: usize,
    },

    /// No active vertex, or the active index is outside the selection.
    #[error("No active vertex in the selection")]
    NoActiveVertex,

    /// A polygon ring has fewer than three vertices.
    #[error("Polygon needs at least 3 vertices, found {0}")]
    DegeneratePolygon(usize),

    /// A normal has zero length (collinear points or zero stored normal).
    #[error("Normal is degenerate (zero length)")]
    DegenerateNormal,

    /// The world transform cannot be inverted for normal transformation.
    #[error("World transform is singular")]
    SingularTransform,

    /// A triangle or face references a vertex that does not exist.
    #[error("Vertex index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds {
        /// Offending vertex index
        index: u32,
        /// Number of vertices in the mesh
        len: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

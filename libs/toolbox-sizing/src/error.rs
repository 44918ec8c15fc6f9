//! # Error Types
//!
//! Error types for sizing calculations.

use thiserror::Error;
use toolbox_geometry::GeometryError;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during sizing calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    /// A length used as a divisor must be positive.
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Which quantity was invalid.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An order label needs a non-empty order ID.
    #[error("Order ID is empty")]
    EmptyOrderId,

    /// Measuring the selected objects failed.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for sizing operations.
pub type SizingResult<T> = Result<T, SizingError>;

/// Rejects zero, negative and non-finite divisors.
pub(crate) fn require_positive(name: &'static str, value: f64) -> SizingResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SizingError::NonPositive { name, value })
    }
}

// =============================================================================
// TESTS
// =============================================================================

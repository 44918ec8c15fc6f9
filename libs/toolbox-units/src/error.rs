//! # Error Types
//!
//! Error types for unit lookups and cost estimation.
//!
//! ## Error Policy
//!
//! - An unknown unit name under a known system is NOT an error: it resolves
//!   to the system's fallback unit
//! - An unknown measurement system is a configuration error
//! - Asking a unitless scene for a length unit is an error

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during unit lookups.
///
/// ## Example
///
/// ```rust
/// use toolbox_units::{lookup_tag, UnitsError};
///
/// match lookup_tag("NAUTICAL", "LEAGUES") {
///     Err(UnitsError::UnknownSystem(tag)) => assert_eq!(tag, "NAUTICAL"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitsError {
    /// The measurement system tag is not one of NONE, METRIC or IMPERIAL.
    #[error("Unknown measurement system: {0}")]
    UnknownSystem(String),

    /// The scene is unitless, so it has no length unit table.
    #[error("Measurement system NONE has no unit table")]
    Unitless,
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for unit operations.
pub type UnitsResult<T> = Result<T, UnitsError>;

// =============================================================================
// TESTS
// =============================================================================

//! # Error Types
//!
//! Error types for asset downloads.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while fetching an asset.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Fetching {url} failed with status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The target file name is not a single plain path component.
    #[error("Invalid asset file name: {0:?}")]
    InvalidFileName(String),

    /// Writing the temporary file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = AssetError::Status {
            url: "https://example.invalid/logo.blend".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("logo.blend"));
        assert!(err.to_string().contains("404"));

        let err = AssetError::InvalidFileName("../logo.blend".to_string());
        assert!(err.to_string().contains("../logo.blend"));

        let err: AssetError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(err.to_string().contains("disk full"));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AssetError>();
    }
}

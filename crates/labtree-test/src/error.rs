//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A palette string contained something other than `#rrggbb` colors
    #[error("invalid hex color '{token}' at position {position}")]
    InvalidHex { token: String, position: usize },

    /// A fixture was requested with a size it cannot satisfy
    #[error("invalid fixture size: {0}")]
    InvalidSize(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

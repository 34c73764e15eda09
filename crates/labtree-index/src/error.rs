//! Error types for labtree-index

use thiserror::Error;

/// Errors that can occur while building or querying a palette index
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndexError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] labtree_core::Error),

    /// No palette entries to build from or search
    #[error("empty palette: at least one entry is required")]
    EmptyPalette,

    /// Invalid query parameters
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl IndexError {
    /// Whether this error stems from a caller-supplied value out of domain.
    ///
    /// Covers both `k == 0` and non-finite LAB coordinates reported by the
    /// core crate.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            IndexError::InvalidArgument(_)
                | IndexError::Core(labtree_core::Error::InvalidArgument(_))
        )
    }
}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

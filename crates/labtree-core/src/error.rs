//! Error types for labtree-core
//!
//! Conversions on already-typed colors are total. Errors only arise at the
//! boundary, where loosely-typed caller data (plain integers, raw floats) is
//! turned into [`Rgb`](crate::Rgb) or checked as a [`Lab`](crate::Lab).

use thiserror::Error;

/// labtree-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Caller supplied a value outside the domain of the operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for labtree-core operations
pub type Result<T> = std::result::Result<T, Error>;

//! Core error types

use thiserror::Error;

/// Color-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not a color notation we can decompose into HSL
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;

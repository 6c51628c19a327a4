//! Error types for fximg-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Core library error (integrity or write-protection failure)
    #[error("core error: {0}")]
    Core(#[from] fximg_core::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

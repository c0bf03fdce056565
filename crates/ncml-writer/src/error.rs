//! Error types for NCML export.

use thiserror::Error;

/// Result type alias using NcmlError.
pub type NcmlResult<T> = Result<T, NcmlError>;

/// Errors raised while writing NCML.
///
/// The writer itself never fails on content: unmapped element types degrade
/// to the `unknown` token. The only failure path is the output sink
/// rejecting a write.
#[derive(Debug, Error)]
pub enum NcmlError {
    #[error("Failed to write to output sink: {0}")]
    Write(#[from] std::fmt::Error),
}

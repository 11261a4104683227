//! Error types for ston-io

use thiserror::Error;

/// Errors that can occur while loading rasters or writing catalogs
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ston_core::Error),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode failure
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Result type for io operations
pub type IoResult<T> = Result<T, IoError>;

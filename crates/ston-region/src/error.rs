//! Error types for ston-region

use thiserror::Error;

/// Errors that can occur during region segmentation
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ston_core::Error),

    /// Label outside the dense range of the map
    #[error("label {label} out of range (map has {count} labels)")]
    LabelOutOfRange { label: u32, count: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

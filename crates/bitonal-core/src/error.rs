//! Error types for bitonal-core
//!
//! A single error enum covers every fallible construction path in the core
//! crate. Out-of-range pixel access is deliberately *not* represented here:
//! all public operations validate coordinates internally, so an out-of-range
//! access is an engine defect and panics instead of returning an error.

use thiserror::Error;

/// Bitonal core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image or kernel dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Externally supplied bitmap is not in the expected packed layout
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

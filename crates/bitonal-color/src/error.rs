//! Error types for bitonal-color

use thiserror::Error;

/// Errors that can occur during binarization or rendering
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bitonal_core::Error),

    /// Input pixel buffer does not match the declared geometry
    #[error("bad pixel buffer: {0}")]
    BadBuffer(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;

//! Error types for the chromatic core.
//!
//! The conversion functions themselves are total and never fail; these errors
//! come from the edges of the library: parsing, model lookup, building colors
//! from loose value lists, and pixel buffer handling.

use thiserror::Error;

/// Errors produced outside the pure conversion functions.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A color model name was not recognized.
    #[error("unknown color model: {0}")]
    UnknownModel(String),

    /// A value list had the wrong number of fields for its model.
    #[error("{model} takes {expected} values, got {got}")]
    ArityMismatch {
        model: String,
        expected: usize,
        got: usize,
    },

    /// Width or height was zero when describing an image.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A pixel buffer did not match its declared dimensions.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    /// A gamut sampling step of zero was requested.
    #[error("invalid sample step {0}: must be at least 1")]
    InvalidSampleStep(u8),

    /// Reading or writing an image failed.
    #[error("i/o error: {0}")]
    Io(String),
}

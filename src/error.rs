//! Error types for wireframe-raster operations.

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or drawing wireframes.
#[derive(Error, Debug)]
pub enum Error {
    /// A line draw was requested on a buffer holding fewer than two points.
    #[error("Need at least 2 points to draw a line, buffer has {len}")]
    NotEnoughPoints {
        /// Logical length of the rejected buffer.
        len: usize,
    },

    /// Point buffer growth could not obtain memory. The buffer is unchanged.
    #[error("Point buffer growth failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Invalid dimensions for a screen.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Why the value is invalid.
        message: String,
    },
}

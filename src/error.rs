//! Custom error types for pixeltint.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pixeltint library.
#[derive(Error, Debug)]
pub enum Error {
    /// A named image resource could not be found.
    #[error("resource {name} not found at {path}")]
    ResourceNotFound { name: String, path: PathBuf },

    /// The codec failed to decode an image resource.
    #[error("failed to decode image resource: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },

    /// The codec failed to re-encode a pixel buffer.
    #[error("failed to encode {width}x{height} pixel buffer into an image")]
    Encode { width: u32, height: u32 },

    /// A pixel buffer's dimensions do not describe its contents.
    #[error("invalid buffer dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    /// A filter name failed to parse against the closed filter set.
    #[error("unknown filter name: {name}")]
    UnknownFilter { name: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pixeltint operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for gradient rendering

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering a gradient
#[derive(Error, Debug)]
pub enum Error {
    /// Image dimensions or variant geometry describe a degenerate shape
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The stop sequence cannot be interpolated
    #[error("Invalid heatmap: {0}")]
    InvalidHeatmap(String),

    /// The output path extension does not name a supported image format
    #[error("Unsupported image format for path {0:?}")]
    UnsupportedFormat(PathBuf),

    /// Filesystem failure while writing the output image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image encoder rejected the pixel buffer
    #[error("Encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Malformed heatmap file or stop syntax
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

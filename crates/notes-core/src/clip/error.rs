//! Clip loading error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an audio clip
#[derive(Error, Debug)]
pub enum ClipError {
    /// File could not be opened or its header is invalid
    #[error("Failed to open clip {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// Sample data could not be decoded
    #[error("Failed to decode clip samples: {0}")]
    Decode(#[from] hound::Error),

    /// Bit depth / sample format combination is not handled
    #[error("Unsupported sample format: {bits}-bit {format}")]
    UnsupportedFormat { bits: u16, format: &'static str },

    /// File contains no audio frames
    #[error("Clip contains no samples: {0:?}")]
    Empty(PathBuf),
}

/// Result type for clip operations
pub type ClipResult<T> = Result<T, ClipError>;

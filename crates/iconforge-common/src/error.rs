//! Error types for icon generation.
//!
//! Only [`Error::SourceNotFound`] is an anticipated condition; every other
//! variant wraps an I/O or codec failure that aborts the run.

use std::path::PathBuf;

/// Common error type for iconforge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// None of the candidate source paths exist.
    #[error("Source image not found (checked {} candidate paths)", candidates.len())]
    SourceNotFound {
        /// Every path that was checked, in order.
        candidates: Vec<PathBuf>,
    },

    /// The source file exists but could not be read.
    #[error("Failed to read source image {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file could not be decoded as an image.
    #[error("Failed to decode source image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A resized icon could not be written.
    #[error("Failed to write {label} icon to {}: {source}", path.display())]
    Write {
        label: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The generator configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a new InvalidConfig error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Label of the size entry that failed to write, if any.
    pub fn failed_label(&self) -> Option<&str> {
        match self {
            Self::Write { label, .. } => Some(label),
            _ => None,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

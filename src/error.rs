//! Error types for the receipt reader

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by detection loading, ordering and field extraction
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Fewer ordered text blocks than fields to fill
    #[error("insufficient detections: found {found} text blocks, need at least {required}")]
    InsufficientDetections { found: usize, required: usize },

    /// A configured validation pattern failed to compile
    #[error("invalid {field} pattern")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A detection file could not be parsed
    #[error("failed to parse detection file {}", path.display())]
    DetectionFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReaderError>;

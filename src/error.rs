//! Error types for the certificate pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while collecting, rendering, or exporting
#[derive(Error, Debug)]
pub enum Error {
    /// The identity record is missing required fields
    #[error("incomplete record: missing {}", .0.join(", "))]
    IncompleteRecord(Vec<String>),

    /// A prefix string did not match any known prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// The certificate markup could not be composed into a render tree
    #[error("Compose failed: {0}")]
    Compose(String),

    /// Sampling the composed node into a bitmap failed
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Encoding a snapshot into an artifact failed
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// The render surface worker is gone
    #[error("Surface unavailable: {0}")]
    Surface(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

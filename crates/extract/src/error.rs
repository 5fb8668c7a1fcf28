//! Extraction boundary error types

use std::io;

/// Extraction result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors crossing the extraction-service boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Extraction failed: {0}")]
    Failed(String),

    #[error("Extraction timed out after {0} seconds")]
    Timeout(u64),
}

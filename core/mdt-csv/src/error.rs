//! Error types for CSV conversion.

use thiserror::Error;

/// CSV conversion errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed CSV input or a failed write.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while flushing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimiter is not a single usable ASCII character.
    #[error("invalid delimiter {0:?}, expected a single ASCII character")]
    InvalidDelimiter(String),
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, Error>;

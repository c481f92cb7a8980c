//! Markdown table model, serializer and parser.
//!
//! This crate defines the interchange structure shared by every input and
//! output format of `mdt`:
//! - [`Table`]: rows of cells plus a header flag and column alignments
//! - [`Alignment`]: the closed set of column alignments
//!
//! A [`Table`] renders to Markdown through [`Table::to_markdown`] (or its
//! `Display` impl) and is read back from Markdown with [`Table::parse`].

mod alignment;
mod parse;
mod render;
mod table;

pub use alignment::Alignment;
pub use table::Table;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or parsing tables.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid alignment character {0:?}, expected one of d, l, r or c")]
    InvalidAlignment(char),
}

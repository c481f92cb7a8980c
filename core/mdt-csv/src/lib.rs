//! CSV reading and writing for `mdt` tables.
//!
//! Every CSV record is data: the header flag of a [`Table`] only matters
//! for Markdown, so no record is treated specially here.

mod error;
mod trim;

use std::io::{Read, Write};

use csv::{ReaderBuilder, WriterBuilder};
use mdt_table::{Alignment, Table};
use tracing::debug;

pub use error::{Error, Result};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Options shared by CSV reading and writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter, a single ASCII byte.
    pub delimiter: u8,
    /// Strip leading whitespace from every field when reading.
    pub trim_leading_space: bool,
}

impl CsvOptions {
    /// Creates options with the given delimiter.
    #[must_use]
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter,
            ..Self::default()
        }
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            trim_leading_space: true,
        }
    }
}

/// Parses a delimiter given on the command line.
///
/// # Errors
/// Returns [`Error::InvalidDelimiter`] unless `s` is exactly one ASCII
/// character other than a quote or line break.
pub fn delimiter_from_str(s: &str) -> Result<u8> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && !matches!(c, '"' | '\r' | '\n') => Ok(c as u8),
        _ => Err(Error::InvalidDelimiter(s.to_owned())),
    }
}

/// Reads every record of `reader` as a row of cells.
///
/// With `trim_leading_space`, whitespace at the start of each field is
/// dropped before quotes are recognized, so `a, "b, c"` has two fields.
///
/// # Errors
/// Fails on I/O errors, invalid UTF-8 and records whose field count
/// differs from the first record.
pub fn read_rows<R: Read>(mut reader: R, options: &CsvOptions) -> Result<Vec<Vec<String>>> {
    let rows = if options.trim_leading_space {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let trimmed = trim::trim_leading_space(&input, options.delimiter);
        collect_rows(trimmed.as_bytes(), options)?
    } else {
        collect_rows(reader, options)?
    };

    debug!(rows = rows.len(), delimiter = %char::from(options.delimiter), "read csv");
    Ok(rows)
}

fn collect_rows<R: Read>(reader: R, options: &CsvOptions) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

/// Reads a CSV document into a [`Table`].
pub fn read_table<R: Read>(
    reader: R,
    options: &CsvOptions,
    alignments: Vec<Alignment>,
    has_header: bool,
) -> Result<Table> {
    let rows = read_rows(reader, options)?;
    Ok(Table {
        rows,
        has_header,
        alignments,
    })
}

/// Writes `rows` as CSV records.
///
/// Rows may have different lengths.
pub fn write_rows<W: Write>(writer: W, rows: &[Vec<String>], options: &CsvOptions) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_writer(writer);

    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    debug!(rows = rows.len(), delimiter = %char::from(options.delimiter), "wrote csv");
    Ok(())
}

/// Writes the rows of `table` as CSV records.
pub fn write_table<W: Write>(writer: W, table: &Table, options: &CsvOptions) -> Result<()> {
    write_rows(writer, &table.rows, options)
}

//! The table model shared by every conversion direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::{Alignment, Error, Result};

/// A table of string cells with optional header and column alignments.
///
/// Rows are not required to have the same length. The first row defines the
/// header columns, later rows keep whatever number of cells they have.
///
/// Alignments are resolved per column by [`Table::alignment_for`]:
/// - no alignments: every column is [`Alignment::Default`]
/// - exactly one alignment: it applies to every column
/// - otherwise the alignment at the column index, or [`Alignment::Default`]
///   for columns past the end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table content, the header (if any) being the first row.
    pub rows: Vec<Vec<String>>,
    /// Whether the first row is a header followed by a separator row.
    #[serde(default = "default_has_header")]
    pub has_header: bool,
    /// Column alignments, see the type-level docs for how they are resolved.
    #[serde(default)]
    pub alignments: Vec<Alignment>,
}

const fn default_has_header() -> bool {
    true
}

impl Table {
    /// Creates a table with a header row and default alignment.
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            has_header: true,
            alignments: Vec::new(),
        }
    }

    /// Replaces the column alignments.
    #[must_use]
    pub fn with_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Treats the first row as ordinary data.
    #[must_use]
    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the header row, if the table has one.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        if self.has_header {
            self.rows.first().map(Vec::as_slice)
        } else {
            None
        }
    }

    /// Returns the number of cells in the widest row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Resolves the alignment of the column at `column`.
    #[must_use]
    pub fn alignment_for(&self, column: usize) -> Alignment {
        match self.alignments.as_slice() {
            [] => Alignment::Default,
            [only] => *only,
            all => all.get(column).copied().unwrap_or_default(),
        }
    }

    /// Renders the table as Markdown.
    ///
    /// Rows are separated by newlines and the last row has no trailing
    /// newline. An empty table renders as the empty string.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        crate::render::render(self)
    }

    /// Parses a Markdown table from `reader`.
    ///
    /// Unless `no_header` is set, the second line is read as the separator
    /// row and provides the alignments instead of a data row.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if reading from `reader` fails.
    pub fn parse<R: BufRead>(reader: R, no_header: bool) -> Result<Self> {
        crate::parse::parse(reader, no_header)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markdown())
    }
}

impl FromStr for Table {
    type Err = Error;

    /// Parses a Markdown table with a header row.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes(), false)
    }
}

//! Column alignment and its two textual encodings.
//!
//! Alignments are written by users as single specifier characters
//! (`d`, `l`, `r`, `c`) and appear in Markdown as separator-row markers
//! (`---`, `:--`, `--:`, `:-:`).

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Smallest separator segment that can carry every marker.
pub(crate) const MIN_MARKER_WIDTH: usize = 3;

/// Alignment of a single table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// No explicit alignment, rendered as `---`.
    #[default]
    Default,
    /// Rendered as `:--`.
    Left,
    /// Rendered as `:-:`.
    Center,
    /// Rendered as `--:`.
    Right,
}

impl Alignment {
    /// All alignments, in specifier order.
    pub const ALL: [Alignment; 4] = [Self::Default, Self::Left, Self::Center, Self::Right];

    /// Parses a single alignment specifier character.
    ///
    /// # Errors
    /// Returns [`Error::InvalidAlignment`] for anything but `d`, `l`, `r` or `c`.
    pub fn from_spec(c: char) -> Result<Self> {
        match c {
            'd' => Ok(Self::Default),
            'l' => Ok(Self::Left),
            'r' => Ok(Self::Right),
            'c' => Ok(Self::Center),
            other => Err(Error::InvalidAlignment(other)),
        }
    }

    /// Parses a sequence of specifier characters, one per column.
    ///
    /// An empty string yields no alignments.
    pub fn parse_spec(spec: &str) -> Result<Vec<Self>> {
        spec.chars().map(Self::from_spec).collect()
    }

    /// Returns the specifier character for this alignment.
    #[must_use]
    pub const fn spec_char(self) -> char {
        match self {
            Self::Default => 'd',
            Self::Left => 'l',
            Self::Center => 'c',
            Self::Right => 'r',
        }
    }

    /// Renders the separator-row segment for a column of the given width.
    ///
    /// Widths below three are widened so the marker stays readable.
    #[must_use]
    pub fn marker(self, width: usize) -> String {
        let width = width.max(MIN_MARKER_WIDTH);
        match self {
            Self::Default => "-".repeat(width),
            Self::Left => format!(":{}", "-".repeat(width - 1)),
            Self::Right => format!("{}:", "-".repeat(width - 1)),
            Self::Center => format!(":{}:", "-".repeat(width - 2)),
        }
    }

    /// Classifies one segment of a separator row.
    ///
    /// Only the first and last characters are inspected. Empty or
    /// colon-free segments are [`Alignment::Default`].
    #[must_use]
    pub fn from_marker(segment: &str) -> Self {
        let segment = segment.trim();
        match (segment.starts_with(':'), segment.ends_with(':')) {
            (true, true) => Self::Center,
            (true, false) => Self::Left,
            (false, true) => Self::Right,
            (false, false) => Self::Default,
        }
    }
}

impl TryFrom<char> for Alignment {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Self::from_spec(c)
    }
}

/// Renders alignments as specifier characters, e.g. `lcd`.
pub(crate) fn spec_string(alignments: &[Alignment]) -> String {
    alignments.iter().map(|a| a.spec_char()).collect()
}

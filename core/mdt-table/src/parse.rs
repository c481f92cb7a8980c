//! Markdown table parsing.

use std::io::BufRead;

use tracing::debug;

use crate::alignment::spec_string;
use crate::{Alignment, Result, Table};

/// Logical line holding the separator row when the table has a header.
const SEPARATOR_LINE: usize = 1;

pub(crate) fn parse<R: BufRead>(reader: R, no_header: bool) -> Result<Table> {
    let mut rows = Vec::new();
    let mut alignments = Vec::new();
    let mut line_idx = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        // Blank lines are not part of the table and do not count as lines.
        if line.is_empty() {
            continue;
        }

        if line_idx == SEPARATOR_LINE && !no_header {
            alignments = parse_separator(line);
        } else {
            rows.push(split_cells(line));
        }
        line_idx += 1;
    }

    debug!(
        rows = rows.len(),
        alignments = %spec_string(&alignments),
        header = !no_header,
        "parsed markdown table"
    );

    Ok(Table {
        rows,
        has_header: !no_header,
        alignments,
    })
}

/// Reads the alignment of every column between the outer pipes.
fn parse_separator(line: &str) -> Vec<Alignment> {
    let segments: Vec<&str> = line.split('|').collect();
    match segments.as_slice() {
        [_, inner @ .., _] => inner.iter().map(|s| Alignment::from_marker(s)).collect(),
        _ => Vec::new(),
    }
}

/// Splits a row into trimmed cells, unescaping `\|`.
///
/// The first character is the opening pipe and is skipped. Text after the
/// last unescaped pipe does not form a cell.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut pipe_escaped = false;
    let mut chars = line.chars().skip(1).peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => pipe_escaped = true,
            '|' if pipe_escaped => {
                pipe_escaped = false;
                cell.push('|');
            }
            '|' => {
                cells.push(cell.trim().to_owned());
                cell.clear();
            }
            other => cell.push(other),
        }
    }

    cells
}

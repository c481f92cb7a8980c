//! Markdown rendering.
//!
//! Every column is padded to the widest cell it holds across the whole
//! table, separator row included, so the pipes line up.

use tracing::debug;

use crate::Table;
use crate::alignment::{MIN_MARKER_WIDTH, spec_string};

pub(crate) fn render(table: &Table) -> String {
    if table.rows.is_empty() {
        return String::new();
    }

    let escaped: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.replace('|', "\\|")).collect())
        .collect();

    let mut widths = vec![0; table.column_count()];
    for row in &escaped {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = table.header().map(|header| {
        (0..header.len())
            .map(|column| {
                let width = widths[column].max(MIN_MARKER_WIDTH);
                widths[column] = width;
                table.alignment_for(column).marker(width)
            })
            .collect::<Vec<_>>()
    });

    let mut lines = Vec::with_capacity(escaped.len() + 1);
    let mut rows = escaped.iter();
    if let Some(separator) = separator {
        lines.extend(rows.next().map(|header| render_row(header, &widths)));
        lines.push(render_row(&separator, &widths));
    }
    lines.extend(rows.map(|row| render_row(row, &widths)));

    debug!(
        rows = table.rows.len(),
        columns = widths.len(),
        header = table.has_header,
        alignments = %spec_string(&table.alignments),
        "rendered markdown table"
    );

    lines.join("\n")
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let cells: String = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("| {cell:<width$} "))
        .collect();
    cells + "|"
}

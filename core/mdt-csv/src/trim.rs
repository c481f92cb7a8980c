//! Leading-space removal ahead of CSV field splitting.
//!
//! Whitespace at the start of a field is dropped before the csv reader sees
//! the input, so a quoted field written after a space (`a, "b, c"`) is still
//! read as quoted. Quoted content is copied untouched.

/// Strips whitespace that directly follows a delimiter or a line break.
///
/// The delimiter itself and line breaks are never stripped, so
/// whitespace delimiters keep their empty fields.
pub(crate) fn trim_leading_space(input: &str, delimiter: u8) -> String {
    let delimiter = char::from(delimiter);
    let mut out = String::with_capacity(input.len());
    let mut field_start = true;
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            out.push(c);
            if c == '"' {
                // `""` is an escaped quote, anything else closes the field.
                if chars.peek() == Some(&'"') {
                    chars.next();
                    out.push('"');
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }

        let line_break = matches!(c, '\n' | '\r');
        if field_start && c.is_whitespace() && c != delimiter && !line_break {
            continue;
        }

        in_quotes = field_start && c == '"';
        field_start = c == delimiter || line_break;
        out.push(c);
    }

    out
}

//! Row fragments
//!
//! Each record becomes a two-cell `<tr>`. Output is the plain concatenation
//! of rows, so an empty input yields an empty string.

use crate::models::Record;

/// Escape text for use as HTML element content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render a single record as a table row
pub fn render_row(record: &Record) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td></tr>",
        escape_html(&record.category),
        record.count
    )
}

/// Render all records as consecutive table rows, in input order
pub fn render_rows(records: &[Record]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&render_row(record));
    }
    output
}

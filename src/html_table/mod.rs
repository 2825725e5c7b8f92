//! HTML table markup
//!
//! Builds `<tr>` fragments for a container element and the standalone
//! counts page that wraps them.

pub mod rows;
pub mod page;

pub use rows::{escape_html, render_row, render_rows};
pub use page::render_counts_page;

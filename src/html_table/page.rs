//! Standalone counts page
//!
//! Wraps the row fragments in a complete HTML document with a header row,
//! suitable for serving on its own and auto-refreshing.

use serde::Serialize;

use crate::config::TableConfig;
use crate::errors::TableError;
use crate::models::Record;

use super::rows::render_rows;

const COUNTS_PAGE_TEMPLATE: &str = include_str!("templates/counts_page.html.mustache");

/// Values substituted into the page template
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    page_title: &'a str,
    heading: &'a str,
    auto_refresh: bool,
    refresh_secs: u32,
    /// Pre-rendered, already escaped row markup
    rows: String,
}

/// Render a complete HTML page listing the records
///
/// A refresh interval of zero disables auto-refresh, same as `None`.
pub fn render_counts_page(records: &[Record], config: &TableConfig) -> Result<String, TableError> {
    let refresh_secs = config.refresh_secs.unwrap_or(0);
    let context = PageContext {
        page_title: &config.page_title,
        heading: &config.heading,
        auto_refresh: refresh_secs > 0,
        refresh_secs,
        rows: render_rows(records),
    };

    let template = mustache::compile_str(COUNTS_PAGE_TEMPLATE)?;
    Ok(template.render_to_string(&context)?)
}

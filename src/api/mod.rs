//! Needle Table WASM API
//!
//! JavaScript-facing entry points. Everything here is a thin wrapper that
//! converts `JsValue`s, delegates to the renderer, and turns errors into
//! strings JavaScript can display.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde conversion, error mapping
//! - `table`: render and page entry points

pub mod helpers;
pub mod table;

pub use table::{poll, render_counts_page_js, render_records, render_rows_js};

//! Needle Table WASM Module
//!
//! Renders per-category needle counts as HTML table rows into a container
//! element. Records come from an injected source and the container handle is
//! passed in explicitly, so the same renderer drives the browser DOM and
//! in-memory containers alike.

pub mod config;
pub mod errors;
pub mod models;
pub mod sources;
pub mod html_table;
pub mod dom;
pub mod renderer;
pub mod api;

// Re-export commonly used types
pub use config::TableConfig;
pub use errors::TableError;
pub use models::{mock_records, Record};
pub use renderer::{render, TableRenderer};
pub use sources::RecordSource;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Needle table WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[WASM] logger already initialized: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}

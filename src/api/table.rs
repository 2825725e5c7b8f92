//! Table rendering entry points

use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, table_error};
use crate::config::TableConfig;
use crate::html_table::{render_counts_page, render_rows};
use crate::models::{records_from_class_counts, Record, NEEDLE_CLASSES};
use crate::renderer::{render, TableRenderer};
use crate::sources::StaticSource;
use crate::wasm_log;

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

/// Render the sample records into `config.container_id` (`#Needle-data`
/// when no config is given)
#[wasm_bindgen]
pub fn poll(config: JsValue) -> Result<usize, JsValue> {
    let config: TableConfig = deserialize_or_default(config, "Failed to deserialize config")?;
    let document = document()?;
    let rows = TableRenderer::new(StaticSource::mock())
        .poll(&document, &config.container_id)
        .map_err(table_error)?;
    wasm_log!("poll: {} rows into #{}", rows, config.container_id);
    Ok(rows)
}

/// Render `records` (an array of `{category, count}` objects) into the
/// element with id `container_id`
#[wasm_bindgen(js_name = renderRecords)]
pub fn render_records(records: JsValue, container_id: &str) -> Result<usize, JsValue> {
    let records: Vec<Record> = deserialize(records, "Failed to deserialize records")?;
    let document = document()?;
    let container = crate::dom::resolve_container(&document, container_id).map_err(table_error)?;

    let rows = render(&records, &container);
    wasm_log!("renderRecords: {} rows into #{}", rows, container_id);
    Ok(rows)
}

/// Row markup for `records` without touching the DOM
#[wasm_bindgen(js_name = renderRows)]
pub fn render_rows_js(records: JsValue) -> Result<String, JsValue> {
    let records: Vec<Record> = deserialize(records, "Failed to deserialize records")?;
    Ok(render_rows(&records))
}

/// Standalone counts page for a detector count map (`{classIndex: count}`)
#[wasm_bindgen(js_name = renderCountsPage)]
pub fn render_counts_page_js(counts: JsValue, config: JsValue) -> Result<String, JsValue> {
    let raw: BTreeMap<String, u64> = deserialize(counts, "Failed to deserialize counts")?;
    let config: TableConfig = deserialize_or_default(config, "Failed to deserialize config")?;

    let counts = crate::sources::json_source::parse_class_indices(raw).map_err(table_error)?;
    let records = records_from_class_counts(NEEDLE_CLASSES, &counts);

    render_counts_page(&records, &config).map_err(table_error)
}

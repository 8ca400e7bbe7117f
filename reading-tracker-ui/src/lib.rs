//! Reading Tracker Dashboard
//!
//! Browser side of the reading tracker, compiled to WebAssembly and loaded by
//! the server-rendered pages.
//!
//! # Features
//!
//! - Reading session stopwatch on the start/stop buttons
//! - Background submission of the session form
//! - Reading progress and genre charts through Chart.js
//! - Bootstrap tooltips
//!
//! # Architecture
//!
//! All behaviour lives in the `reading-tracker` core crate behind traits.
//! This crate implements those traits with `web-sys`, `gloo-timers` and
//! `gloo-net`, and attaches them to the page once the DOM is ready. Templates
//! call the exported `initReadingProgressChart`, `initGenreChart` and
//! `formatDate` functions directly.

use reading_tracker::{render_genre_chart, render_progress_chart, ChartData, Config, TrackerResult};
use wasm_bindgen::prelude::*;

pub mod api;
pub mod components;
pub mod dom;
pub mod logging;
pub mod scheduler;
pub mod state;

use components::ChartJsBackend;

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = match state::page_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!("Ignoring page config: {}", e);
    }

    components::apply_chart_defaults(&config.charts);

    let wired = dom::on_dom_ready(move || {
        if let Err(e) = wire_page(&config) {
            tracing::error!("Failed to wire page: {}", dom::describe(&e));
        }
    });
    if let Err(e) = wired {
        tracing::error!("Failed to wait for page load: {}", dom::describe(&e));
    }
}

fn wire_page(config: &Config) -> Result<(), JsValue> {
    if let Some(document) = dom::document() {
        let tooltips = components::init_tooltips(&document)?;
        tracing::debug!(tooltips, "Tooltips initialised");
    }

    // The controller stays alive through the click handlers holding it
    components::wire_session_controls(config)?;
    components::wire_session_form(config)?;
    Ok(())
}

/// Draw the reading progress chart into canvas `element_id`.
///
/// Returns the Chart.js instance, or `undefined` when the canvas is missing or
/// the chart could not be created. Never throws.
#[wasm_bindgen(js_name = initReadingProgressChart)]
pub fn init_reading_progress_chart(element_id: &str, data: JsValue) -> Option<JsValue> {
    let drawn = chart_data(&data).and_then(|data| render_progress_chart(&ChartJsBackend, element_id, &data));
    settle(element_id, drawn)
}

/// Draw the genre distribution chart into canvas `element_id`.
///
/// Same contract as [`init_reading_progress_chart`].
#[wasm_bindgen(js_name = initGenreChart)]
pub fn init_genre_chart(element_id: &str, data: JsValue) -> Option<JsValue> {
    let palette = state::page_config().unwrap_or_default().charts.genre_palette;
    let drawn = chart_data(&data)
        .and_then(|data| render_genre_chart(&ChartJsBackend, element_id, &data, &palette));
    settle(element_id, drawn)
}

/// Short `M/D/YYYY` date; unparseable input comes back unchanged
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: &str) -> String {
    reading_tracker::format_date(date).unwrap_or_else(|| date.to_string())
}

fn chart_data(data: &JsValue) -> TrackerResult<ChartData> {
    let json = js_sys::JSON::stringify(data)
        .map(String::from)
        .map_err(|e| reading_tracker::TrackerError::Serialization(dom::describe(&e)))?;
    Ok(serde_json::from_str(&json)?)
}

fn settle(element_id: &str, drawn: TrackerResult<Option<JsValue>>) -> Option<JsValue> {
    drawn.unwrap_or_else(|e| {
        tracing::warn!(element_id, "Chart not drawn: {}", e);
        None
    })
}

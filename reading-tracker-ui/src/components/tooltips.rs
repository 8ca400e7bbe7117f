//! Bootstrap tooltips for elements marked `data-bs-toggle="tooltip"`.

use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom::global_constructor;

const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;

/// Create a Bootstrap tooltip for every marked element.
///
/// Returns how many were created; 0 when Bootstrap isn't on the page.
pub fn init_tooltips(document: &Document) -> Result<u32, JsValue> {
    let Some(tooltip) = global_constructor(&["bootstrap", "Tooltip"]) else {
        tracing::debug!("Bootstrap not loaded, skipping tooltips");
        return Ok(0);
    };

    let nodes = document.query_selector_all(TOOLTIP_SELECTOR)?;
    for index in 0..nodes.length() {
        if let Some(node) = nodes.item(index) {
            Reflect::construct(&tooltip, &Array::of1(&node))?;
        }
    }
    Ok(nodes.length())
}

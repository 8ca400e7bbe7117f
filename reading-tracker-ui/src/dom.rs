//! DOM Helpers
//!
//! Element lookup, event registration and the page capabilities the core
//! session controller and timer write through. Every lookup tolerates the
//! element being absent.

use reading_tracker::config::ElementIds;
use reading_tracker::{SessionButton, SessionPage, TextTarget};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Element `id` cast to a concrete element type, `None` if absent or of another type
pub fn typed_element<T: JsCast>(id: &str) -> Option<T> {
    element_by_id(id)?.dyn_into::<T>().ok()
}

/// Register `handler` for `event` on `target` for the lifetime of the page
pub fn on_event(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Run `f` once the document has been parsed
pub fn on_dom_ready(f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("no document"))?;
    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?;

    if ready_state.as_string().as_deref() == Some("loading") {
        let callback = Closure::once_into_js(f);
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        f();
    }
    Ok(())
}

/// Constructor reachable from the global object, e.g. `["bootstrap", "Tooltip"]`
pub fn global_constructor(path: &[&str]) -> Option<js_sys::Function> {
    let mut value: JsValue = js_sys::global().into();
    for key in path {
        value = js_sys::Reflect::get(&value, &JsValue::from_str(key)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
    }
    value.dyn_into::<js_sys::Function>().ok()
}

/// Readable message for a thrown JS value
pub fn describe(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", err),
    }
}

/// Text of an element, looked up on every write
pub struct ElementText {
    id: String,
}

impl ElementText {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl TextTarget for ElementText {
    fn set_text(&self, text: &str) {
        if let Some(element) = element_by_id(&self.id) {
            element.set_text_content(Some(text));
        }
    }
}

/// Start/stop buttons and the hidden duration field of the session panel
pub struct DomSessionPage {
    start_button: String,
    stop_button: String,
    duration_field: String,
}

impl DomSessionPage {
    pub fn new(ids: &ElementIds) -> Self {
        Self {
            start_button: ids.start_button.clone(),
            stop_button: ids.stop_button.clone(),
            duration_field: ids.duration_field.clone(),
        }
    }
}

impl SessionPage for DomSessionPage {
    fn set_button_visible(&self, button: SessionButton, visible: bool) {
        let id = match button {
            SessionButton::Start => &self.start_button,
            SessionButton::Stop => &self.stop_button,
        };
        if let Some(element) = typed_element::<HtmlElement>(id) {
            let display = if visible { "block" } else { "none" };
            if let Err(e) = element.style().set_property("display", display) {
                tracing::debug!(id = %id, "Could not toggle button: {}", describe(&e));
            }
        }
    }

    fn set_duration_field(&self, seconds: u64) {
        if let Some(input) = typed_element::<HtmlInputElement>(&self.duration_field) {
            input.set_value(&seconds.to_string());
        }
    }
}

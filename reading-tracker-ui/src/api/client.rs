//! HTTP Client
//!
//! Browser implementations of the core submission seams: a `fetch`-backed
//! transport, the page reloader, and reading a session form off the page.

use async_trait::async_trait;
use gloo_net::http::Request;
use reading_tracker::config::SubmitConfig;
use reading_tracker::{
    CsrfToken, FormFields, PostRequest, Reloader, SessionSubmission, TrackerError, TrackerResult,
    Transport,
};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlDocument, HtmlFormElement};

use crate::dom::{self, describe};

/// `fetch` transport. Cookies ride along with same-origin requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post(&self, request: &PostRequest) -> TrackerResult<String> {
        let builder = request
            .headers
            .iter()
            .fold(Request::post(&request.url), |builder, (name, value)| {
                builder.header(name, value)
            });

        let response = builder
            .body(request.body.clone())
            .map_err(|e| TrackerError::Transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| TrackerError::Transport(format!("Network error: {}", e)))?;

        response
            .text()
            .await
            .map_err(|e| TrackerError::Transport(format!("Read error: {}", e)))
    }
}

/// Reloads the current document
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationReloader;

impl Reloader for LocationReloader {
    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().reload() {
            tracing::warn!("Page reload failed: {}", describe(&e));
        }
    }
}

/// The document's cookie string, empty when unavailable
pub fn document_cookies() -> String {
    dom::document()
        .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

/// Snapshot the fields, action and CSRF token of `form`.
///
/// File inputs are skipped; the session form carries none.
pub fn read_submission(form: &HtmlFormElement, config: &SubmitConfig) -> TrackerResult<SessionSubmission> {
    let data = FormData::new_with_form(form).map_err(|e| TrackerError::Dom(describe(&e)))?;
    let entries = js_sys::try_iter(&data)
        .map_err(|e| TrackerError::Dom(describe(&e)))?
        .ok_or_else(|| TrackerError::Dom("form data is not iterable".to_string()))?;

    let mut fields = FormFields::new();
    for entry in entries {
        let entry: js_sys::Array = entry.map_err(|e| TrackerError::Dom(describe(&e)))?.unchecked_into();
        if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            fields.push(name, value);
        }
    }

    Ok(SessionSubmission {
        action: form.action(),
        fields,
        csrf: CsrfToken::from_cookies(&document_cookies(), &config.csrf_cookie),
    })
}

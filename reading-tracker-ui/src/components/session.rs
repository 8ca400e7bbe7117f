//! Reading Session Panel
//!
//! Wires the start/stop buttons to a session controller and the session form
//! to the asynchronous submission flow.

use std::cell::RefCell;
use std::rc::Rc;

use reading_tracker::{
    submit_session, Config, SessionController, SessionTimer, SubmitOutcome, SystemClock, UiEvent,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use crate::api::{read_submission, FetchTransport, LocationReloader};
use crate::dom::{element_by_id, on_event, typed_element, DomSessionPage, ElementText};
use crate::scheduler::IntervalScheduler;

/// Controller used by the session panel in the browser
pub type PageController = SessionController<SystemClock, IntervalScheduler, DomSessionPage>;

/// Create an idle controller and route button clicks to it.
///
/// Only buttons present on the page get a handler.
pub fn wire_session_controls(config: &Config) -> Result<Rc<RefCell<PageController>>, JsValue> {
    let ids = &config.elements;
    let timer = SessionTimer::new(
        SystemClock,
        IntervalScheduler,
        Rc::new(ElementText::new(&ids.timer_display)),
        config.timer.refresh_interval_ms,
    );
    let controller = Rc::new(RefCell::new(SessionController::new(
        timer,
        DomSessionPage::new(ids),
    )));

    for (id, event) in [
        (&ids.start_button, UiEvent::StartClicked),
        (&ids.stop_button, UiEvent::StopClicked),
    ] {
        if let Some(button) = element_by_id(id) {
            let controller = Rc::clone(&controller);
            on_event(&button, "click", move |_| controller.borrow_mut().handle(event))?;
        }
    }

    Ok(controller)
}

/// Submit the session form in the background instead of navigating
pub fn wire_session_form(config: &Config) -> Result<(), JsValue> {
    let Some(form) = typed_element::<HtmlFormElement>(&config.elements.session_form) else {
        return Ok(());
    };

    let submit = config.submit.clone();
    let target = form.clone();
    on_event(&target, "submit", move |event| {
        event.prevent_default();

        let request = match read_submission(&form, &submit) {
            Ok(submission) => submission.into_request(&submit.csrf_header),
            Err(e) => {
                tracing::warn!("Could not read session form: {}", e);
                return;
            }
        };

        spawn_local(async move {
            if let SubmitOutcome::Failed(e) =
                submit_session(&FetchTransport, &LocationReloader, request).await
            {
                tracing::debug!("Session not saved: {}", e);
            }
        });
    })
}

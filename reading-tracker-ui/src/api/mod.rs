//! Network access for the session form.

pub mod client;

pub use client::{document_cookies, read_submission, FetchTransport, LocationReloader};

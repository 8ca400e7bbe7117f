//! Page Components
//!
//! Behaviour attached to the server-rendered dashboard: charts, the reading
//! session panel and tooltips.

pub mod chart;
pub mod session;
pub mod tooltips;

pub use chart::{apply_chart_defaults, ChartJsBackend};
pub use session::{wire_session_controls, wire_session_form, PageController};
pub use tooltips::init_tooltips;

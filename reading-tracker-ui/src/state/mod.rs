//! Page State
//!
//! The only state the page carries is its configuration, read from an
//! optional inline block:
//!
//! ```html
//! <script type="application/toml" id="reading-tracker-config">
//! [timer]
//! refresh_interval_ms = 1000
//! </script>
//! ```

use reading_tracker::{Config, ConfigError};

use crate::dom::element_by_id;

/// Id of the inline configuration block
pub const CONFIG_ELEMENT_ID: &str = "reading-tracker-config";

/// Configuration for this page; defaults when the page has no config block
pub fn page_config() -> Result<Config, ConfigError> {
    match element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(text) => Config::from_toml_str(&text),
        None => Ok(Config::default()),
    }
}

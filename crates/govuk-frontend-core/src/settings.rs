//! Settings for the govuk-frontend crates.
//!
//! [`Settings`] is a plain value built once at application start-up (usually
//! via [`settings_loader`](crate::settings_loader)) and then handed to the
//! components that need it. There is no global settings instance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Date input configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInputSettings {
    /// Whether the month field accepts English month names and their
    /// three-letter abbreviations (`jan`, `january`, ...) in place of a number.
    pub accept_month_names: bool,
}

impl Default for DateInputSettings {
    fn default() -> Self {
        Self {
            accept_month_names: true,
        }
    }
}

/// The complete set of library settings.
///
/// # Examples
///
/// ```
/// use govuk_frontend_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert!(settings.date_input.accept_month_names);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level filter (e.g. "info", "debug", "govuk_frontend_forms=trace").
    pub log_level: String,

    // ── Components ───────────────────────────────────────────────────

    /// Date input binding options.
    pub date_input: DateInputSettings,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            date_input: DateInputSettings::default(),
            extra: HashMap::new(),
        }
    }
}

//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `GOVUK_DEBUG` | `debug` |
//! | `GOVUK_LOG_LEVEL` | `log_level` |
//! | `GOVUK_ACCEPT_MONTH_NAMES` | `date_input.accept_month_names` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use govuk_frontend_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("config/govuk.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::GovUkError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Any settings not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, GovUkError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| GovUkError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, GovUkError> {
    from_toml_str(&read_config(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, GovUkError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or cannot be deserialized.
pub fn from_json_str(json_str: &str) -> Result<Settings, GovUkError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| GovUkError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, GovUkError> {
    from_json_str(&read_config(path.as_ref(), "JSON")?)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, GovUkError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// Boolean variables accept "true"/"1"/"yes" (case-insensitive) as true and
/// anything else as false.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("GOVUK_DEBUG") {
        settings.debug = parse_bool(&val);
    }

    if let Ok(val) = std::env::var("GOVUK_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("GOVUK_ACCEPT_MONTH_NAMES") {
        settings.date_input.accept_month_names = parse_bool(&val);
    }
}

// ============================================================
// Helpers
// ============================================================

fn parse_bool(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

fn read_config(path: &Path, format: &str) -> Result<String, GovUkError> {
    std::fs::read_to_string(path).map_err(|e| {
        GovUkError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

/// Deep-merges `overrides` over the serialized default settings and
/// deserializes the result.
fn merge_over_defaults(
    overrides: serde_json::Value,
    format: &str,
) -> Result<Settings, GovUkError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        GovUkError::SerializationError(format!("Failed to serialize default settings: {e}"))
    })?;

    serde_json::from_value(merge_json(default_json, overrides)).map_err(|e| {
        GovUkError::ConfigurationError(format!("Failed to deserialize settings from {format}: {e}"))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = match base_map.remove(&key) {
                    Some(base_v) => merge_json(base_v, override_v),
                    None => override_v,
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_date_input() {
        let toml = r#"
            debug = false

            [date_input]
            accept_month_names = false
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(!settings.debug);
        assert!(!settings.date_input.accept_month_names);
        // Defaults preserved
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert!(settings.debug);
        assert!(settings.date_input.accept_month_names);
    }

    #[test]
    fn test_from_toml_str_invalid() {
        assert!(from_toml_str("[[invalid toml content").is_err());
    }

    #[test]
    fn test_from_toml_str_wrong_type() {
        let err = from_toml_str("[date_input]\naccept_month_names = \"sometimes\"").unwrap_err();
        assert!(matches!(err, GovUkError::ConfigurationError(_)));
    }

    #[test]
    fn test_from_toml_str_extra() {
        let settings = from_toml_str("[extra]\nservice_name = \"Apply for a licence\"").unwrap();
        assert_eq!(settings.extra["service_name"], "Apply for a licence");
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_basic() {
        let json = r#"{
            "log_level": "debug",
            "date_input": { "accept_month_names": false }
        }"#;

        let settings = from_json_str(json).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert!(!settings.date_input.accept_month_names);
        assert!(settings.debug);
    }

    #[test]
    fn test_from_json_str_empty_object() {
        let settings = from_json_str("{}").unwrap();
        assert!(settings.debug);
        assert!(settings.date_input.accept_month_names);
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{invalid json").is_err());
    }

    // ── File loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_file() {
        let dir = std::env::temp_dir().join("govuk_frontend_test_toml");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "log_level = \"warn\"\n").unwrap();

        let settings = from_toml_file(&path).unwrap();
        assert_eq!(settings.log_level, "warn");

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_from_json_file() {
        let dir = std::env::temp_dir().join("govuk_frontend_test_json");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{"debug": false}"#).unwrap();

        let settings = from_json_file(&path).unwrap();
        assert!(!settings.debug);

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_from_file_missing() {
        let err = from_toml_file("/nonexistent/path/settings.toml").unwrap_err();
        assert!(matches!(err, GovUkError::ConfigurationError(_)));
        let err = from_json_file("/nonexistent/path/settings.json").unwrap_err();
        assert!(matches!(err, GovUkError::ConfigurationError(_)));
    }

    // ── Environment variable overrides ──────────────────────────────

    #[test]
    #[serial]
    fn test_apply_env_overrides_accept_month_names() {
        let mut settings = Settings::default();
        std::env::set_var("GOVUK_ACCEPT_MONTH_NAMES", "false");
        apply_env_overrides(&mut settings);
        assert!(!settings.date_input.accept_month_names);

        std::env::set_var("GOVUK_ACCEPT_MONTH_NAMES", "YES");
        apply_env_overrides(&mut settings);
        assert!(settings.date_input.accept_month_names);
        std::env::remove_var("GOVUK_ACCEPT_MONTH_NAMES");
    }

    #[test]
    #[serial]
    fn test_apply_env_overrides_debug_and_log_level() {
        let mut settings = Settings::default();
        std::env::set_var("GOVUK_DEBUG", "0");
        std::env::set_var("GOVUK_LOG_LEVEL", "debug");
        apply_env_overrides(&mut settings);
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "debug");
        std::env::remove_var("GOVUK_DEBUG");
        std::env::remove_var("GOVUK_LOG_LEVEL");
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var("GOVUK_ACCEPT_MONTH_NAMES", "0");
        let settings = from_env();
        assert!(!settings.date_input.accept_month_names);
        std::env::remove_var("GOVUK_ACCEPT_MONTH_NAMES");
    }

    #[test]
    #[serial]
    fn test_toml_with_env_override() {
        let dir = std::env::temp_dir().join("govuk_frontend_test_toml_env");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings_env.toml");
        std::fs::write(&path, "[date_input]\naccept_month_names = true\n").unwrap();

        std::env::set_var("GOVUK_ACCEPT_MONTH_NAMES", "false");
        let settings = from_toml_file_with_env(&path).unwrap();
        assert!(!settings.date_input.accept_month_names);

        std::env::remove_var("GOVUK_ACCEPT_MONTH_NAMES");
        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    // ── merge_json helper ───────────────────────────────────────────

    #[test]
    fn test_merge_json_nested() {
        let base = serde_json::json!({"outer": {"a": 1, "b": 2}});
        let over = serde_json::json!({"outer": {"b": 3}});
        let merged = merge_json(base, over);
        assert_eq!(merged["outer"]["a"], 1);
        assert_eq!(merged["outer"]["b"], 3);
    }

    #[test]
    fn test_merge_json_array_override() {
        let base = serde_json::json!({"list": [1, 2, 3]});
        let over = serde_json::json!({"list": [4, 5]});
        assert_eq!(merge_json(base, over)["list"], serde_json::json!([4, 5]));
    }
}

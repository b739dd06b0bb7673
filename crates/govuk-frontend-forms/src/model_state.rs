//! Validation state for a form submission.
//!
//! [`ModelState`] records, per field name, the value the user attempted and
//! any validation errors, so a form can be redisplayed with the submitted text
//! and error messages. Date inputs also record their parse errors here, which
//! lets a renderer work out which of the day, month, and year fields to
//! highlight.

use std::collections::HashMap;

use govuk_frontend_core::ValidationError;

use crate::date_input::{DateInputParseErrors, ErrorFieldGroup};

/// The state recorded for a single field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelStateEntry {
    /// The raw value submitted, if the field was submitted.
    pub attempted_value: Option<String>,
    /// Validation errors for the field.
    pub errors: Vec<ValidationError>,
}

/// Attempted values and validation errors for a submission.
///
/// # Examples
///
/// ```
/// use govuk_frontend_core::ValidationError;
/// use govuk_frontend_forms::ModelState;
///
/// let mut state = ModelState::new();
/// state.set_attempted_value("Date.Day", Some("31"));
/// state.add_error("Date", ValidationError::new("Date must be a real date", "date_input"));
///
/// assert_eq!(state.attempted_value("Date.Day"), Some("31"));
/// assert_eq!(state.error_count(), 1);
/// assert!(!state.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelState {
    entries: HashMap<String, ModelStateEntry>,
    date_input_parse_errors: HashMap<String, DateInputParseErrors>,
}

impl ModelState {
    /// Creates an empty `ModelState`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the value submitted for `key`.
    pub fn set_attempted_value(&mut self, key: &str, value: Option<&str>) {
        self.entries.entry(key.to_string()).or_default().attempted_value = value.map(String::from);
    }

    /// The value submitted for `key`, if one was recorded.
    pub fn attempted_value(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|entry| entry.attempted_value.as_deref())
    }

    /// Adds a validation error for `key`.
    pub fn add_error(&mut self, key: &str, error: ValidationError) {
        self.entries
            .entry(key.to_string())
            .or_default()
            .errors
            .push(error);
    }

    /// The validation errors recorded for `key`.
    pub fn errors(&self, key: &str) -> &[ValidationError] {
        self.entries
            .get(key)
            .map_or(&[], |entry| entry.errors.as_slice())
    }

    /// The entry for `key`, if anything was recorded.
    pub fn get(&self, key: &str) -> Option<&ModelStateEntry> {
        self.entries.get(key)
    }

    /// Returns `true` if anything was recorded for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The total number of validation errors.
    pub fn error_count(&self) -> usize {
        self.entries.values().map(|entry| entry.errors.len()).sum()
    }

    /// Returns `true` if no validation errors are recorded.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Records the parse errors of the date input bound to `model_name`.
    pub fn set_date_input_parse_errors(&mut self, model_name: &str, errors: DateInputParseErrors) {
        self.date_input_parse_errors
            .insert(model_name.to_string(), errors);
    }

    /// The parse errors recorded for the date input bound to `model_name`.
    pub fn date_input_parse_errors(&self, model_name: &str) -> Option<DateInputParseErrors> {
        self.date_input_parse_errors.get(model_name).copied()
    }

    /// The date input fields to highlight for `model_name`.
    ///
    /// Recorded parse errors decide the group. Without them, an error recorded
    /// against the date input as a whole (for example by application-level
    /// validation) highlights all three fields.
    pub fn error_field_group(&self, model_name: &str) -> ErrorFieldGroup {
        match self.date_input_parse_errors(model_name) {
            Some(errors) if !errors.is_empty() => ErrorFieldGroup::from(errors),
            _ if !self.errors(model_name).is_empty() => ErrorFieldGroup::ALL,
            _ => ErrorFieldGroup::NONE,
        }
    }

    /// Iterates all recorded entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelStateEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_input::{DateInputItem, DateInputParseError};

    #[test]
    fn test_new_is_valid() {
        let state = ModelState::new();
        assert!(state.is_valid());
        assert_eq!(state.error_count(), 0);
        assert!(!state.contains_key("Date"));
        assert!(state.errors("Date").is_empty());
    }

    #[test]
    fn test_attempted_values() {
        let mut state = ModelState::new();
        state.set_attempted_value("Date.Day", Some("x"));
        state.set_attempted_value("Date.Month", None);
        assert_eq!(state.attempted_value("Date.Day"), Some("x"));
        assert_eq!(state.attempted_value("Date.Month"), None);
        assert!(state.contains_key("Date.Month"));
        assert!(state.is_valid());
    }

    #[test]
    fn test_errors_accumulate() {
        let mut state = ModelState::new();
        state.add_error("Date", ValidationError::new("one", "a"));
        state.add_error("Date", ValidationError::new("two", "b"));
        state.add_error("Other", ValidationError::new("three", "c"));
        assert_eq!(state.errors("Date").len(), 2);
        assert_eq!(state.error_count(), 3);
        assert_eq!(state.iter().count(), 2);
    }

    #[test]
    fn test_error_field_group_from_parse_errors() {
        let mut state = ModelState::new();
        state.set_date_input_parse_errors(
            "Date",
            DateInputParseError::MissingMonth | DateInputParseError::InvalidYear,
        );
        let group = state.error_field_group("Date");
        assert!(!group.contains(DateInputItem::Day));
        assert!(group.contains(DateInputItem::Month));
        assert!(group.contains(DateInputItem::Year));
    }

    #[test]
    fn test_error_field_group_without_parse_errors() {
        let mut state = ModelState::new();
        assert!(state.error_field_group("Date").is_empty());

        state.add_error("Date", ValidationError::new("Date must be in the past", "past"));
        assert_eq!(state.error_field_group("Date"), ErrorFieldGroup::ALL);
    }
}

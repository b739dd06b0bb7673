//! The single error message shown for a date input that failed to parse.

use super::errors::DateInputParseErrors;

/// Builds the error message for `errors`, using `display_name` as the subject.
///
/// Missing fields take precedence: if any field is missing the message lists
/// the missing fields (day, then month, then year), even when another field is
/// also invalid. Otherwise the message is the generic "must be a real date".
///
/// Returns `None` when there is nothing to report, or when all three fields are
/// missing. A completely empty date input is never bound, so it never gets a
/// message here.
///
/// # Examples
///
/// ```
/// use govuk_frontend_forms::date_input::{format_error_message, DateInputParseError};
///
/// let message = format_error_message(DateInputParseError::MissingDay.into(), "Date of birth");
/// assert_eq!(message.as_deref(), Some("Date of birth must include a day"));
///
/// let message = format_error_message(DateInputParseError::InvalidMonth.into(), "Date of birth");
/// assert_eq!(message.as_deref(), Some("Date of birth must be a real date"));
/// ```
pub fn format_error_message(errors: DateInputParseErrors, display_name: &str) -> Option<String> {
    if errors.is_empty() {
        return None;
    }

    let missing: Vec<&str> = errors
        .missing_items()
        .into_iter()
        .map(|item| item.label())
        .collect();

    match missing.len() {
        0 => Some(format!("{display_name} must be a real date")),
        1 | 2 => Some(format!("{display_name} must include a {}", missing.join(" and "))),
        _ => None,
    }
}

//! Parsing the raw day, month, and year fields of a date input.
//!
//! Every field is checked before returning, so a single submission reports
//! all of its missing and invalid fields at once.

use chrono::NaiveDate;

use super::components::DateComponents;
use super::errors::{DateInputParseError, DateInputParseErrors};

const MONTH_NAMES: [(&str, &str); 12] = [
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("may", "may"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Parses the submitted day, month, and year into [`DateComponents`].
///
/// - A field that is absent, empty, or whitespace is missing.
/// - Surrounding whitespace is ignored.
/// - The year must be exactly four ASCII digits, 0001 to 9999.
/// - The month must be 1 to 12, or when `accept_month_names` is set, an English
///   month name or three-letter abbreviation in any case.
/// - The day must be 1 to 31 and, when the year and month are valid, must exist
///   in that month.
///
/// # Errors
///
/// Returns every missing and invalid field when the date cannot be built.
///
/// # Examples
///
/// ```
/// use govuk_frontend_forms::date_input::{parse, DateInputParseError};
///
/// let date = parse(Some("29"), Some("2"), Some("2020"), false).unwrap();
/// assert_eq!((date.day(), date.month(), date.year()), (29, 2, 2020));
///
/// let errors = parse(Some("29"), Some("2"), Some("2021"), false).unwrap_err();
/// assert!(errors.contains(DateInputParseError::InvalidDay));
/// ```
pub fn parse(
    day: Option<&str>,
    month: Option<&str>,
    year: Option<&str>,
    accept_month_names: bool,
) -> Result<DateComponents, DateInputParseErrors> {
    let mut errors = DateInputParseErrors::NONE;

    let year = check(
        year,
        parse_year,
        DateInputParseError::MissingYear,
        DateInputParseError::InvalidYear,
        &mut errors,
    );
    let month = check(
        month,
        |s| parse_month(s, accept_month_names),
        DateInputParseError::MissingMonth,
        DateInputParseError::InvalidMonth,
        &mut errors,
    );
    let day = check(
        day,
        parse_day,
        DateInputParseError::MissingDay,
        DateInputParseError::InvalidDay,
        &mut errors,
    );

    // The day is only checked against the month length once all three
    // fields are usable on their own.
    match (year, month, day) {
        (Some(year), Some(month), Some(day)) => NaiveDate::from_ymd_opt(year, month, day)
            .map(DateComponents::from)
            .ok_or_else(|| DateInputParseError::InvalidDay.into()),
        _ => Err(errors),
    }
}

/// Returns `true` if the raw value counts as not entered.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn check<T>(
    raw: Option<&str>,
    parse_value: impl FnOnce(&str) -> Option<T>,
    missing: DateInputParseError,
    invalid: DateInputParseError,
    errors: &mut DateInputParseErrors,
) -> Option<T> {
    if is_blank(raw) {
        errors.insert(missing);
        return None;
    }
    let value = raw.map(str::trim).and_then(parse_value);
    if value.is_none() {
        errors.insert(invalid);
    }
    value
}

fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn parse_year(value: &str) -> Option<i32> {
    if value.len() != 4 {
        return None;
    }
    parse_digits(value)
        .filter(|year| (1..=9999).contains(year))
        .and_then(|year| i32::try_from(year).ok())
}

fn parse_month(value: &str, accept_month_names: bool) -> Option<u32> {
    if let Some(month) = parse_digits(value) {
        return (1..=12).contains(&month).then_some(month);
    }
    if !accept_month_names {
        return None;
    }
    let lower = value.to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .position(|(short, long)| lower == *short || lower == *long)
        .and_then(|index| u32::try_from(index + 1).ok())
}

fn parse_day(value: &str) -> Option<u32> {
    parse_digits(value).filter(|day| (1..=31).contains(day))
}

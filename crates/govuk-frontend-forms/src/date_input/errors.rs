//! Parse errors for the three fields of a date input.
//!
//! Each field is either fine, missing, or invalid; never both missing and
//! invalid. [`DateInputParseErrors`] stores one state per field so that
//! invariant holds by construction, while still exposing the six named flags
//! of [`DateInputParseError`] for building and querying.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use super::components::DateInputItem;

/// One of the six date input parse error flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateInputParseError {
    /// The day field was empty or not submitted.
    MissingDay,
    /// The day field was not a day that exists in the given month.
    InvalidDay,
    /// The month field was empty or not submitted.
    MissingMonth,
    /// The month field was not a month number (or name, when accepted).
    InvalidMonth,
    /// The year field was empty or not submitted.
    MissingYear,
    /// The year field was not a four digit year.
    InvalidYear,
}

impl DateInputParseError {
    /// Every flag, in day, month, year order.
    pub const ALL: [Self; 6] = [
        Self::MissingDay,
        Self::InvalidDay,
        Self::MissingMonth,
        Self::InvalidMonth,
        Self::MissingYear,
        Self::InvalidYear,
    ];

    /// The field this flag belongs to.
    pub const fn item(self) -> DateInputItem {
        match self {
            Self::MissingDay | Self::InvalidDay => DateInputItem::Day,
            Self::MissingMonth | Self::InvalidMonth => DateInputItem::Month,
            Self::MissingYear | Self::InvalidYear => DateInputItem::Year,
        }
    }

    /// The kind of failure this flag describes.
    pub const fn kind(self) -> FieldErrorKind {
        match self {
            Self::MissingDay | Self::MissingMonth | Self::MissingYear => FieldErrorKind::Missing,
            Self::InvalidDay | Self::InvalidMonth | Self::InvalidYear => FieldErrorKind::Invalid,
        }
    }

    /// Builds the flag for a field and failure kind.
    pub const fn for_item(item: DateInputItem, kind: FieldErrorKind) -> Self {
        match (item, kind) {
            (DateInputItem::Day, FieldErrorKind::Missing) => Self::MissingDay,
            (DateInputItem::Day, FieldErrorKind::Invalid) => Self::InvalidDay,
            (DateInputItem::Month, FieldErrorKind::Missing) => Self::MissingMonth,
            (DateInputItem::Month, FieldErrorKind::Invalid) => Self::InvalidMonth,
            (DateInputItem::Year, FieldErrorKind::Missing) => Self::MissingYear,
            (DateInputItem::Year, FieldErrorKind::Invalid) => Self::InvalidYear,
        }
    }
}

impl fmt::Display for DateInputParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Why a single field failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// Empty, whitespace-only, or not submitted.
    Missing,
    /// Submitted but not acceptable.
    Invalid,
}

/// The set of parse errors for a date input submission.
///
/// The empty set means the submission parsed. Flags combine with `|`; when two
/// flags for the same field are combined the right-hand one wins, because a
/// field cannot be both missing and invalid.
///
/// # Examples
///
/// ```
/// use govuk_frontend_forms::date_input::{DateInputParseError, DateInputParseErrors};
///
/// let errors = DateInputParseError::InvalidMonth | DateInputParseError::MissingYear;
/// assert!(errors.contains(DateInputParseError::InvalidMonth));
/// assert!(errors.contains(DateInputParseError::MissingYear));
/// assert!(!errors.contains(DateInputParseError::MissingMonth));
/// assert_eq!(errors.to_string(), "InvalidMonth | MissingYear");
/// assert!(DateInputParseErrors::NONE.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateInputParseErrors {
    day: Option<FieldErrorKind>,
    month: Option<FieldErrorKind>,
    year: Option<FieldErrorKind>,
}

impl DateInputParseErrors {
    /// No errors.
    pub const NONE: Self = Self {
        day: None,
        month: None,
        year: None,
    };

    /// Returns `true` if no flag is set.
    pub const fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// Returns `true` if `flag` is set.
    pub fn contains(&self, flag: DateInputParseError) -> bool {
        self.get(flag.item()) == Some(flag.kind())
    }

    /// Returns the failure kind recorded for a field, if any.
    pub const fn get(&self, item: DateInputItem) -> Option<FieldErrorKind> {
        match item {
            DateInputItem::Day => self.day,
            DateInputItem::Month => self.month,
            DateInputItem::Year => self.year,
        }
    }

    /// Sets `flag`, replacing any other flag for the same field.
    pub fn insert(&mut self, flag: DateInputParseError) {
        let kind = Some(flag.kind());
        match flag.item() {
            DateInputItem::Day => self.day = kind,
            DateInputItem::Month => self.month = kind,
            DateInputItem::Year => self.year = kind,
        }
    }

    /// Returns `true` if the field has any error.
    pub const fn has_error(&self, item: DateInputItem) -> bool {
        self.get(item).is_some()
    }

    /// Iterates the set flags in day, month, year order.
    pub fn iter(&self) -> impl Iterator<Item = DateInputParseError> + '_ {
        DateInputParseError::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }

    /// The fields flagged as missing, in day, month, year order.
    pub fn missing_items(&self) -> Vec<DateInputItem> {
        self.items_with(FieldErrorKind::Missing)
    }

    /// The fields flagged as invalid, in day, month, year order.
    pub fn invalid_items(&self) -> Vec<DateInputItem> {
        self.items_with(FieldErrorKind::Invalid)
    }

    fn items_with(&self, kind: FieldErrorKind) -> Vec<DateInputItem> {
        DateInputItem::ALL
            .into_iter()
            .filter(|item| self.get(*item) == Some(kind))
            .collect()
    }
}

impl From<DateInputParseError> for DateInputParseErrors {
    fn from(flag: DateInputParseError) -> Self {
        let mut errors = Self::NONE;
        errors.insert(flag);
        errors
    }
}

impl FromIterator<DateInputParseError> for DateInputParseErrors {
    fn from_iter<I: IntoIterator<Item = DateInputParseError>>(iter: I) -> Self {
        let mut errors = Self::NONE;
        for flag in iter {
            errors.insert(flag);
        }
        errors
    }
}

impl BitOrAssign<DateInputParseError> for DateInputParseErrors {
    fn bitor_assign(&mut self, flag: DateInputParseError) {
        self.insert(flag);
    }
}

impl BitOr<DateInputParseError> for DateInputParseErrors {
    type Output = Self;

    fn bitor(mut self, flag: DateInputParseError) -> Self {
        self.insert(flag);
        self
    }
}

impl BitOr for DateInputParseError {
    type Output = DateInputParseErrors;

    fn bitor(self, rhs: Self) -> DateInputParseErrors {
        DateInputParseErrors::from(self) | rhs
    }
}

impl BitOr for DateInputParseErrors {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        rhs.iter().fold(self, |acc, flag| acc | flag)
    }
}

impl fmt::Display for DateInputParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let names: Vec<String> = self.iter().map(|flag| flag.to_string()).collect();
        f.write_str(&names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DateInputParseError::*;

    #[test]
    fn test_none_is_empty() {
        assert!(DateInputParseErrors::NONE.is_empty());
        assert_eq!(DateInputParseErrors::default(), DateInputParseErrors::NONE);
        assert_eq!(DateInputParseErrors::NONE.iter().count(), 0);
        assert_eq!(DateInputParseErrors::NONE.to_string(), "None");
    }

    #[test]
    fn test_each_flag_round_trips_through_item_and_kind() {
        for flag in DateInputParseError::ALL {
            assert_eq!(DateInputParseError::for_item(flag.item(), flag.kind()), flag);
            let errors = DateInputParseErrors::from(flag);
            assert!(errors.contains(flag));
            assert_eq!(errors.iter().collect::<Vec<_>>(), vec![flag]);
        }
    }

    #[test]
    fn test_missing_and_invalid_are_exclusive_per_field() {
        let errors = MissingDay | InvalidDay;
        assert!(errors.contains(InvalidDay));
        assert!(!errors.contains(MissingDay));

        let errors = InvalidYear | MissingYear;
        assert!(errors.contains(MissingYear));
        assert!(!errors.contains(InvalidYear));
    }

    #[test]
    fn test_combining_sets() {
        let left = MissingDay | InvalidMonth;
        let right = DateInputParseErrors::from(InvalidYear);
        let all = left | right;
        assert_eq!(all.iter().collect::<Vec<_>>(), vec![MissingDay, InvalidMonth, InvalidYear]);
    }

    #[test]
    fn test_bitor_assign_and_from_iter() {
        let mut errors = DateInputParseErrors::NONE;
        errors |= MissingMonth;
        errors |= MissingYear;
        let collected: DateInputParseErrors = [MissingMonth, MissingYear].into_iter().collect();
        assert_eq!(errors, collected);
    }

    #[test]
    fn test_missing_and_invalid_items() {
        let errors = MissingDay | InvalidMonth | MissingYear;
        assert_eq!(errors.missing_items(), vec![DateInputItem::Day, DateInputItem::Year]);
        assert_eq!(errors.invalid_items(), vec![DateInputItem::Month]);
        assert!(errors.has_error(DateInputItem::Month));
    }

    #[test]
    fn test_display_lists_flags_in_order() {
        let errors = InvalidYear | MissingDay;
        assert_eq!(errors.to_string(), "MissingDay | InvalidYear");
    }
}

//! Date components and the fields of a date input.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::errors::DateInputParseErrors;

/// A calendar date split into the day, month, and year a date input shows.
///
/// Always a date that exists in the proleptic Gregorian calendar.
///
/// # Examples
///
/// ```
/// use govuk_frontend_forms::date_input::DateComponents;
///
/// let date = DateComponents::new(2020, 2, 29).unwrap();
/// assert_eq!((date.day(), date.month(), date.year()), (29, 2, 2020));
/// assert!(DateComponents::new(2021, 2, 29).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateComponents(NaiveDate);

impl DateComponents {
    /// Creates components for `year`-`month`-`day`, or `None` if that date
    /// does not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The month, 1 to 12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The date as a [`NaiveDate`].
    pub const fn to_naive_date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateComponents {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateComponents> for NaiveDate {
    fn from(components: DateComponents) -> Self {
        components.0
    }
}

impl fmt::Display for DateComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// One of the three text fields of a date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateInputItem {
    /// The day field.
    Day,
    /// The month field.
    Month,
    /// The year field.
    Year,
}

impl DateInputItem {
    /// All items in display order.
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];

    /// The suffix appended to the model name to form the field name.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    /// The lower-case name used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// The submitted field name for this item: `{model_name}.Day` etc, or just
    /// `Day` when the model name is empty.
    ///
    /// ```
    /// use govuk_frontend_forms::date_input::DateInputItem;
    ///
    /// assert_eq!(DateInputItem::Month.field_name("DateOfBirth"), "DateOfBirth.Month");
    /// assert_eq!(DateInputItem::Year.field_name(""), "Year");
    /// ```
    pub fn field_name(self, model_name: &str) -> String {
        if model_name.is_empty() {
            self.suffix().to_string()
        } else {
            format!("{model_name}.{}", self.suffix())
        }
    }
}

impl fmt::Display for DateInputItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fields of a date input that should be styled as erroneous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ErrorFieldGroup {
    day: bool,
    month: bool,
    year: bool,
}

impl ErrorFieldGroup {
    /// No fields.
    pub const NONE: Self = Self {
        day: false,
        month: false,
        year: false,
    };

    /// All three fields; used when the whole input is in error without
    /// per-field parse information.
    pub const ALL: Self = Self {
        day: true,
        month: true,
        year: true,
    };

    /// Returns `true` if `item` is in the group.
    pub const fn contains(&self, item: DateInputItem) -> bool {
        match item {
            DateInputItem::Day => self.day,
            DateInputItem::Month => self.month,
            DateInputItem::Year => self.year,
        }
    }

    /// Returns `true` if no field is in the group.
    pub const fn is_empty(&self) -> bool {
        !(self.day || self.month || self.year)
    }

    /// Iterates the grouped items in display order.
    pub fn iter(&self) -> impl Iterator<Item = DateInputItem> + '_ {
        DateInputItem::ALL
            .into_iter()
            .filter(move |item| self.contains(*item))
    }
}

impl From<DateInputParseErrors> for ErrorFieldGroup {
    fn from(errors: DateInputParseErrors) -> Self {
        Self {
            day: errors.has_error(DateInputItem::Day),
            month: errors.has_error(DateInputItem::Month),
            year: errors.has_error(DateInputItem::Year),
        }
    }
}

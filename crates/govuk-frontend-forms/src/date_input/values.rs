//! The text shown in the three fields of a date input.
//!
//! Reading goes both ways: [`DateInputValues::from_provider`] collects what was
//! submitted, and [`DateInputValues::for_model`] works out what to show when a
//! form is rendered, from model state or from an existing model value.

use std::any::Any;

use govuk_frontend_core::{GovUkError, GovUkResult};

use super::components::{DateComponents, DateInputItem};
use super::converter::ModelType;
use super::options::DateInputOptions;
use super::parser::is_blank;
use crate::model_state::ModelState;
use crate::value_provider::ValueProvider;

/// Raw day, month, and year text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateInputValues {
    /// The day field.
    pub day: Option<String>,
    /// The month field.
    pub month: Option<String>,
    /// The year field.
    pub year: Option<String>,
}

impl DateInputValues {
    /// Reads the submitted `{model_name}.Day`, `.Month`, and `.Year` values.
    pub fn from_provider(values: &(impl ValueProvider + ?Sized), model_name: &str) -> Self {
        let read = |item: DateInputItem| {
            values
                .get_value(&item.field_name(model_name))
                .map(String::from)
        };
        Self {
            day: read(DateInputItem::Day),
            month: read(DateInputItem::Month),
            year: read(DateInputItem::Year),
        }
    }

    /// The text for a date, formatted the way a user would type it.
    ///
    /// ```
    /// use govuk_frontend_forms::date_input::{DateComponents, DateInputValues};
    ///
    /// let values = DateInputValues::from_components(DateComponents::new(987, 3, 9).unwrap());
    /// assert_eq!(values.day.as_deref(), Some("9"));
    /// assert_eq!(values.month.as_deref(), Some("3"));
    /// assert_eq!(values.year.as_deref(), Some("0987"));
    /// ```
    pub fn from_components(date: DateComponents) -> Self {
        Self {
            day: Some(date.day().to_string()),
            month: Some(date.month().to_string()),
            year: Some(format!("{:04}", date.year())),
        }
    }

    /// The values to render for the date input bound to `model_name`.
    ///
    /// Values attempted in this submission win, so invalid input is shown back
    /// to the user as typed. Otherwise the date is read from `model` through
    /// the registered converter. With neither, all fields are empty.
    ///
    /// # Errors
    ///
    /// Returns [`GovUkError::ImproperlyConfigured`] if a model is given and no
    /// converter is registered for `T`.
    pub fn for_model<T: Any>(
        options: &DateInputOptions,
        model_state: &ModelState,
        model_name: &str,
        model: Option<&T>,
    ) -> GovUkResult<Self> {
        let attempted = DateInputItem::ALL
            .iter()
            .any(|item| model_state.contains_key(&item.field_name(model_name)));
        if attempted {
            let read = |item: DateInputItem| {
                model_state
                    .attempted_value(&item.field_name(model_name))
                    .map(String::from)
            };
            return Ok(Self {
                day: read(DateInputItem::Day),
                month: read(DateInputItem::Month),
                year: read(DateInputItem::Year),
            });
        }

        let Some(model) = model else {
            return Ok(Self::default());
        };

        let model_type = ModelType::of::<T>();
        let converter = options.converters.find(model_type).ok_or_else(|| {
            GovUkError::ImproperlyConfigured(format!(
                "No date input model converter is registered for '{model_type}'"
            ))
        })?;

        Ok(converter
            .get_date_from_model(model_type, model)
            .map(Self::from_components)
            .unwrap_or_default())
    }

    /// The text for one field.
    pub fn get(&self, item: DateInputItem) -> Option<&str> {
        match item {
            DateInputItem::Day => self.day.as_deref(),
            DateInputItem::Month => self.month.as_deref(),
            DateInputItem::Year => self.year.as_deref(),
        }
    }

    /// Returns `true` if no field has any non-whitespace text.
    pub fn is_blank(&self) -> bool {
        DateInputItem::ALL.iter().all(|item| is_blank(self.get(*item)))
    }
}

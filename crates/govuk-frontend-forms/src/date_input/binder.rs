//! Binding a submitted date input to a typed model value.
//!
//! A bind reads `{model_name}.Day`, `.Month`, and `.Year`, then ends in one of
//! three ways:
//!
//! - **Untouched**: nothing was entered, so nothing is bound or recorded.
//! - **Bound**: the fields parsed (or the converter accepted the parse errors)
//!   and a model value was created.
//! - **Rejected**: the fields did not parse. The submitted text and a single
//!   error for the whole date input are recorded in [`ModelState`].
//!
//! A model type with no registered converter is a configuration error and
//! fails the bind with [`GovUkError::ImproperlyConfigured`].

use std::any::Any;
use std::sync::Arc;

use govuk_frontend_core::logging::bind_span;
use govuk_frontend_core::{GovUkError, GovUkResult, ValidationError};

use super::components::DateInputItem;
use super::converter::{BoxedModel, ModelType};
use super::error_message::format_error_message;
use super::errors::DateInputParseErrors;
use super::metadata::DateInputMetadata;
use super::options::DateInputOptions;
use super::parser::parse;
use super::values::DateInputValues;
use crate::model_state::ModelState;
use crate::value_provider::ValueProvider;

/// The validation error code used for date input errors.
pub const DATE_INPUT_ERROR_CODE: &str = "date_input";

/// The outcome of binding a date input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingResult<T> {
    /// No field had a value; the model was not bound.
    Untouched,
    /// A model value was created.
    Bound(T),
    /// The submission was not a date.
    Rejected(DateInputRejection),
}

impl<T> BindingResult<T> {
    /// Returns `true` for [`BindingResult::Untouched`].
    pub const fn is_untouched(&self) -> bool {
        matches!(self, Self::Untouched)
    }

    /// Returns `true` for [`BindingResult::Bound`].
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// Returns `true` for [`BindingResult::Rejected`].
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The bound value, if any.
    pub fn bound(self) -> Option<T> {
        match self {
            Self::Bound(value) => Some(value),
            Self::Untouched | Self::Rejected(_) => None,
        }
    }

    /// The rejection, if any.
    pub const fn rejection(&self) -> Option<&DateInputRejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Untouched | Self::Bound(_) => None,
        }
    }
}

/// Why a date input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInputRejection {
    /// The text that was submitted, for redisplay.
    pub values: DateInputValues,
    /// What was wrong with each field.
    pub errors: DateInputParseErrors,
    /// The error message recorded for the date input.
    pub message: String,
}

/// Binds date inputs using the converters and options configured at start-up.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use chrono::NaiveDate;
/// use govuk_frontend_forms::date_input::{
///     BindingResult, DateInputMetadata, DateInputModelBinder, DateInputOptions,
/// };
/// use govuk_frontend_forms::ModelState;
/// use govuk_frontend_http::FormData;
///
/// let binder = DateInputModelBinder::new(Arc::new(DateInputOptions::default()));
/// let metadata = DateInputMetadata::new("DateOfBirth").display_name("Date of birth");
/// let mut state = ModelState::new();
///
/// let form = FormData::parse("DateOfBirth.Day=1&DateOfBirth.Month=4&DateOfBirth.Year=2020");
/// let result = binder.bind::<NaiveDate>("DateOfBirth", &metadata, &form, &mut state).unwrap();
/// assert_eq!(result, BindingResult::Bound(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap()));
///
/// let form = FormData::parse("DateOfBirth.Day=&DateOfBirth.Month=4&DateOfBirth.Year=2020");
/// let result = binder.bind::<NaiveDate>("DateOfBirth", &metadata, &form, &mut state).unwrap();
/// assert!(result.is_rejected());
/// assert_eq!(state.errors("DateOfBirth")[0].message, "Date of birth must include a day");
/// ```
#[derive(Debug, Clone)]
pub struct DateInputModelBinder {
    options: Arc<DateInputOptions>,
}

impl DateInputModelBinder {
    /// Creates a binder sharing `options`.
    pub const fn new(options: Arc<DateInputOptions>) -> Self {
        Self { options }
    }

    /// The options this binder uses.
    pub fn options(&self) -> &DateInputOptions {
        &self.options
    }

    /// Returns `true` if a converter is registered for `T`, i.e. a date input
    /// can be bound to a `T`.
    pub fn can_bind<T: Any>(&self) -> bool {
        self.options.converters.can_convert(ModelType::of::<T>())
    }

    /// Binds the date input named `model_name` to a `T`.
    ///
    /// Field-level problems are recorded in `model_state` and returned as
    /// [`BindingResult::Rejected`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`GovUkError::ImproperlyConfigured`] if no converter is
    /// registered for `T`, or if the converter produces a value that is not a
    /// `T`. Nothing is recorded in `model_state` when an error is returned.
    pub fn bind<T: Any>(
        &self,
        model_name: &str,
        metadata: &DateInputMetadata,
        values: &(impl ValueProvider + ?Sized),
        model_state: &mut ModelState,
    ) -> GovUkResult<BindingResult<T>> {
        let span = bind_span(model_name);
        let _guard = span.enter();

        let submitted = DateInputValues::from_provider(values, model_name);
        if submitted.is_blank() {
            tracing::debug!("date input not submitted, skipping bind");
            return Ok(BindingResult::Untouched);
        }

        let model_type = ModelType::of::<T>();
        let Some(converter) = self.options.converters.find(model_type) else {
            tracing::warn!(model_type = %model_type, "no date input model converter registered");
            return Err(GovUkError::ImproperlyConfigured(format!(
                "No date input model converter is registered for '{model_type}'"
            )));
        };

        let errors = match parse(
            submitted.day.as_deref(),
            submitted.month.as_deref(),
            submitted.year.as_deref(),
            self.options.accept_month_names,
        ) {
            Ok(date) => {
                tracing::debug!(%date, "date input bound");
                let model = converter.create_model_from_date(model_type, date);
                return downcast(model, model_type).map(BindingResult::Bound);
            }
            Err(errors) => errors,
        };

        if let Some(model) = converter.try_create_model_from_errors(model_type, errors) {
            let model = downcast(model, model_type)?;
            tracing::debug!(%errors, "date input parse errors accepted by converter");
            record_attempted_values(model_state, model_name, &submitted);
            model_state.set_date_input_parse_errors(model_name, errors);
            return Ok(BindingResult::Bound(model));
        }

        let message = format_error_message(errors, metadata.error_display_name())
            .ok_or_else(|| {
                GovUkError::BadRequest(format!(
                    "Date input '{model_name}' has no reportable parse errors ({errors})"
                ))
            })?;

        tracing::debug!(%errors, "date input rejected");
        record_attempted_values(model_state, model_name, &submitted);
        model_state.set_date_input_parse_errors(model_name, errors);
        model_state.add_error(
            model_name,
            ValidationError::new(message.clone(), DATE_INPUT_ERROR_CODE)
                .with_param("parse_errors", errors.to_string()),
        );

        Ok(BindingResult::Rejected(DateInputRejection {
            values: submitted,
            errors,
            message,
        }))
    }
}

impl Default for DateInputModelBinder {
    fn default() -> Self {
        Self::new(Arc::new(DateInputOptions::default()))
    }
}

fn record_attempted_values(
    model_state: &mut ModelState,
    model_name: &str,
    values: &DateInputValues,
) {
    for item in DateInputItem::ALL {
        model_state.set_attempted_value(&item.field_name(model_name), values.get(item));
    }
}

fn downcast<T: Any>(model: BoxedModel, model_type: ModelType) -> GovUkResult<T> {
    model.downcast::<T>().map(|model| *model).map_err(|_| {
        tracing::warn!(
            model_type = %model_type,
            "date input model converter returned the wrong type"
        );
        GovUkError::ImproperlyConfigured(format!(
            "Date input model converter returned a value that is not a '{model_type}'"
        ))
    })
}

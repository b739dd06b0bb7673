//! Converting between [`DateComponents`] and application model types.
//!
//! A date input can bind to any type with a registered
//! [`DateInputModelConverter`]. Converters answer for the types they support
//! through [`can_convert`](DateInputModelConverter::can_convert) and exchange
//! values as `dyn Any`, so one registry can serve unrelated model types.

use std::any::{Any, TypeId};
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::components::DateComponents;
use super::errors::DateInputParseErrors;

/// A model value produced by a converter.
pub type BoxedModel = Box<dyn Any + Send>;

/// Identifies a model type at run time.
///
/// ```
/// use govuk_frontend_forms::date_input::ModelType;
///
/// let model_type = ModelType::of::<chrono::NaiveDate>();
/// assert!(model_type.is::<chrono::NaiveDate>());
/// assert!(!model_type.is::<Option<chrono::NaiveDate>>());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ModelType {
    id: TypeId,
    name: &'static str,
}

impl ModelType {
    /// The model type for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns `true` if this is the model type for `T`.
    pub fn is<T: ?Sized + 'static>(self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// The type's name, for diagnostics.
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ModelType {}

impl std::hash::Hash for ModelType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Converts between date components and one or more model types.
///
/// Converters are registered once at start-up and shared between requests, so
/// they must be `Send + Sync` and should be stateless.
///
/// `create_model_from_date` and `get_date_from_model` are only called with a
/// `model_type` for which `can_convert` returned `true`.
pub trait DateInputModelConverter: Send + Sync {
    /// Returns `true` if this converter handles `model_type`.
    fn can_convert(&self, model_type: ModelType) -> bool;

    /// Creates a model of `model_type` from a parsed date.
    fn create_model_from_date(&self, model_type: ModelType, date: DateComponents) -> BoxedModel;

    /// Reads the date held by `model`, or `None` if the model has no value.
    fn get_date_from_model(&self, model_type: ModelType, model: &dyn Any)
        -> Option<DateComponents>;

    /// Creates a model of `model_type` that records a failed parse.
    ///
    /// Model types that can hold invalid input override this to keep the
    /// submission instead of failing the bind. The default declines.
    fn try_create_model_from_errors(
        &self,
        model_type: ModelType,
        errors: DateInputParseErrors,
    ) -> Option<BoxedModel> {
        let _ = (model_type, errors);
        None
    }
}

/// Converter for [`NaiveDate`] and `Option<NaiveDate>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDateConverter;

impl DateInputModelConverter for NaiveDateConverter {
    fn can_convert(&self, model_type: ModelType) -> bool {
        model_type.is::<NaiveDate>() || model_type.is::<Option<NaiveDate>>()
    }

    fn create_model_from_date(&self, model_type: ModelType, date: DateComponents) -> BoxedModel {
        let date = date.to_naive_date();
        if model_type.is::<Option<NaiveDate>>() {
            Box::new(Some(date))
        } else {
            Box::new(date)
        }
    }

    fn get_date_from_model(
        &self,
        _model_type: ModelType,
        model: &dyn Any,
    ) -> Option<DateComponents> {
        model
            .downcast_ref::<NaiveDate>()
            .copied()
            .or_else(|| model.downcast_ref::<Option<NaiveDate>>().copied().flatten())
            .map(DateComponents::from)
    }
}

/// Converter for [`NaiveDateTime`] and `Option<NaiveDateTime>`.
///
/// Bound values are at midnight; reading a value back drops the time of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDateTimeConverter;

impl DateInputModelConverter for NaiveDateTimeConverter {
    fn can_convert(&self, model_type: ModelType) -> bool {
        model_type.is::<NaiveDateTime>() || model_type.is::<Option<NaiveDateTime>>()
    }

    fn create_model_from_date(&self, model_type: ModelType, date: DateComponents) -> BoxedModel {
        let date_time = date.to_naive_date().and_time(NaiveTime::MIN);
        if model_type.is::<Option<NaiveDateTime>>() {
            Box::new(Some(date_time))
        } else {
            Box::new(date_time)
        }
    }

    fn get_date_from_model(
        &self,
        _model_type: ModelType,
        model: &dyn Any,
    ) -> Option<DateComponents> {
        model
            .downcast_ref::<NaiveDateTime>()
            .copied()
            .or_else(|| model.downcast_ref::<Option<NaiveDateTime>>().copied().flatten())
            .map(|dt| DateComponents::from(dt.date()))
    }
}

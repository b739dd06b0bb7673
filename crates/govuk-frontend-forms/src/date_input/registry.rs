//! The ordered list of registered date input model converters.

use std::fmt;
use std::sync::Arc;

use super::converter::{
    DateInputModelConverter, ModelType, NaiveDateConverter, NaiveDateTimeConverter,
};

/// An ordered collection of converters. The first converter that can convert a
/// model type is used for it.
///
/// Build the registry once at start-up; it is cheap to clone and safe to share
/// between threads.
///
/// # Examples
///
/// ```
/// use govuk_frontend_forms::date_input::{ConverterRegistry, ModelType};
///
/// let registry = ConverterRegistry::with_defaults();
/// assert!(registry.find(ModelType::of::<chrono::NaiveDate>()).is_some());
/// assert!(registry.find(ModelType::of::<String>()).is_none());
/// ```
#[derive(Clone, Default)]
pub struct ConverterRegistry {
    converters: Vec<Arc<dyn DateInputModelConverter>>,
}

impl ConverterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in converters for
    /// [`chrono::NaiveDate`] and [`chrono::NaiveDateTime`].
    pub fn with_defaults() -> Self {
        Self::new()
            .with_converter(NaiveDateConverter)
            .with_converter(NaiveDateTimeConverter)
    }

    /// Appends a converter, builder style.
    #[must_use]
    pub fn with_converter(mut self, converter: impl DateInputModelConverter + 'static) -> Self {
        self.register(converter);
        self
    }

    /// Appends a converter. It is consulted after those already registered.
    pub fn register(&mut self, converter: impl DateInputModelConverter + 'static) {
        self.converters.push(Arc::new(converter));
    }

    /// Inserts a converter at `index`, ahead of those after it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, converter: impl DateInputModelConverter + 'static) {
        self.converters.insert(index, Arc::new(converter));
    }

    /// Returns the first converter that can convert `model_type`.
    pub fn find(&self, model_type: ModelType) -> Option<&dyn DateInputModelConverter> {
        self.converters
            .iter()
            .find(|converter| converter.can_convert(model_type))
            .map(|converter| &**converter)
    }

    /// Returns `true` if some converter can convert `model_type`.
    pub fn can_convert(&self, model_type: ModelType) -> bool {
        self.find(model_type).is_some()
    }

    /// The number of registered converters.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Returns `true` if no converters are registered.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("len", &self.converters.len())
            .finish()
    }
}

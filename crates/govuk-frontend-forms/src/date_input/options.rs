//! Start-up configuration for date input binding.

use govuk_frontend_core::Settings;

use super::converter::DateInputModelConverter;
use super::registry::ConverterRegistry;

/// Options shared by every date input bind.
///
/// Built once when the application starts and handed to
/// [`DateInputModelBinder`](super::DateInputModelBinder) behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DateInputOptions {
    /// Whether month names are accepted in the month field.
    pub accept_month_names: bool,
    /// The converters date inputs can bind to.
    pub converters: ConverterRegistry,
}

impl Default for DateInputOptions {
    fn default() -> Self {
        Self {
            accept_month_names: true,
            converters: ConverterRegistry::with_defaults(),
        }
    }
}

impl DateInputOptions {
    /// Creates options from loaded settings, with the built-in converters.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            accept_month_names: settings.date_input.accept_month_names,
            converters: ConverterRegistry::with_defaults(),
        }
    }

    /// Sets whether month names are accepted.
    #[must_use]
    pub fn accept_month_names(mut self, accept: bool) -> Self {
        self.accept_month_names = accept;
        self
    }

    /// Appends a converter after the ones already registered.
    #[must_use]
    pub fn with_converter(mut self, converter: impl DateInputModelConverter + 'static) -> Self {
        self.converters.register(converter);
        self
    }
}

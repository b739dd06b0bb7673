//! GOV.UK date input binding.
//!
//! A date input is three text fields, day, month, and year, that together
//! describe one date. This module turns a submission of those fields into a
//! typed model value, or into a single error message for the whole input plus
//! the per-field detail needed to highlight the right fields.
//!
//! The pieces, leaves first:
//!
//! - [`parse`] checks the raw text and returns [`DateComponents`] or
//!   [`DateInputParseErrors`].
//! - [`format_error_message`] turns parse errors into the message shown to the
//!   user.
//! - [`DateInputModelConverter`] maps components to and from a model type;
//!   [`ConverterRegistry`] picks the converter for a type.
//! - [`DateInputModelBinder`] runs the whole bind and records the outcome in
//!   [`ModelState`](crate::ModelState).

mod binder;
mod components;
mod converter;
mod error_message;
mod errors;
mod metadata;
mod options;
mod parser;
mod registry;
mod values;

pub use binder::{BindingResult, DateInputModelBinder, DateInputRejection, DATE_INPUT_ERROR_CODE};
pub use components::{DateComponents, DateInputItem, ErrorFieldGroup};
pub use converter::{
    BoxedModel, DateInputModelConverter, ModelType, NaiveDateConverter, NaiveDateTimeConverter,
};
pub use error_message::format_error_message;
pub use errors::{DateInputParseError, DateInputParseErrors, FieldErrorKind};
pub use metadata::DateInputMetadata;
pub use options::DateInputOptions;
pub use parser::{is_blank, parse};
pub use registry::ConverterRegistry;
pub use values::DateInputValues;

//! # govuk-frontend-forms
//!
//! Form binding for GOV.UK Design System components. The main entry point is
//! the [`date_input`] module, which binds the three day/month/year text
//! fields of a date input to a typed model value, or records a single
//! group-level error in [`ModelState`] when the submission is not a real date.
//!
//! ## Modules
//!
//! - [`date_input`] - Date input parsing, error messages, converters, and binding
//! - [`model_state`] - Attempted values and validation errors per field
//! - [`value_provider`] - Read access to submitted values by field name

pub mod date_input;
pub mod model_state;
pub mod value_provider;

pub use model_state::ModelState;
pub use value_provider::ValueProvider;

//! # govuk-frontend
//!
//! Server-side form binding for the GOV.UK Design System.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient access.
//! You can depend on `govuk-frontend` to get everything, or depend on
//! individual crates for finer-grained control.
//!
//! ```
//! use govuk_frontend::forms::date_input::{DateInputMetadata, DateInputModelBinder};
//! use govuk_frontend::forms::ModelState;
//! use govuk_frontend::http::FormData;
//!
//! let binder = DateInputModelBinder::default();
//! let form = FormData::parse("Dob.Day=31&Dob.Month=4&Dob.Year=2020");
//! let mut state = ModelState::new();
//!
//! let result = binder
//!     .bind::<chrono::NaiveDate>("Dob", &DateInputMetadata::new("Dob"), &form, &mut state)
//!     .unwrap();
//! assert!(result.is_rejected());
//! assert_eq!(state.errors("Dob")[0].message, "Dob must be a real date");
//! ```

/// Error types, settings, and logging setup.
pub use govuk_frontend_core as core;

/// Submitted form values.
#[cfg(feature = "http")]
pub use govuk_frontend_http as http;

/// Date input parsing, model converters, and model state.
#[cfg(feature = "forms")]
pub use govuk_frontend_forms as forms;

pub use chrono;
pub use tracing;

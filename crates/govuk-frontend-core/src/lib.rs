//! # govuk-frontend-core
//!
//! Core types, settings, and error types for the govuk-frontend crates.
//! This crate has no framework dependencies and provides the foundation for the
//! HTTP and forms crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Library settings
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{GovUkError, GovUkResult, ValidationError};
pub use settings::{DateInputSettings, Settings};

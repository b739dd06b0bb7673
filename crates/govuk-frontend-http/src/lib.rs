//! # govuk-frontend-http
//!
//! HTTP layer for the govuk-frontend crates. Provides [`FormData`], the
//! decoded `application/x-www-form-urlencoded` body of a submission, which the
//! model binders read raw field values from.

pub mod form_data;

pub use form_data::FormData;

//! Per-property metadata used when building date input error messages.

/// Describes the model property a date input is bound to.
///
/// # Examples
///
/// ```
/// use govuk_frontend_forms::date_input::DateInputMetadata;
///
/// let metadata = DateInputMetadata::new("DateOfBirth").display_name("Date of birth");
/// assert_eq!(metadata.error_display_name(), "Date of birth");
///
/// let metadata = metadata.error_message_prefix("Your date of birth");
/// assert_eq!(metadata.error_display_name(), "Your date of birth");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInputMetadata {
    /// The property name on the model.
    pub property_name: String,
    /// The property's declared display label.
    pub display_name: Option<String>,
    /// Overrides the subject of date input error messages.
    pub error_message_prefix: Option<String>,
}

impl DateInputMetadata {
    /// Creates metadata for `property_name` with no display name or prefix.
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            display_name: None,
            error_message_prefix: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the error message prefix.
    #[must_use]
    pub fn error_message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_message_prefix = Some(prefix.into());
        self
    }

    /// The subject used in error messages: the error message prefix if set,
    /// otherwise the display name, otherwise the property name.
    pub fn error_display_name(&self) -> &str {
        self.error_message_prefix
            .as_deref()
            .or(self.display_name.as_deref())
            .unwrap_or(&self.property_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_back_to_property_name() {
        assert_eq!(DateInputMetadata::new("StartDate").error_display_name(), "StartDate");
    }

    #[test]
    fn test_prefix_beats_display_name() {
        let metadata = DateInputMetadata::new("StartDate")
            .error_message_prefix("The start date")
            .display_name("Start date");
        assert_eq!(metadata.error_display_name(), "The start date");
    }

    #[test]
    fn test_prefix_without_display_name() {
        let metadata = DateInputMetadata::new("StartDate").error_message_prefix("Start");
        assert_eq!(metadata.error_display_name(), "Start");
    }
}

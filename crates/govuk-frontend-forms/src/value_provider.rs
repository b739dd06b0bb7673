//! Read access to submitted values by field name.

use std::collections::HashMap;

use govuk_frontend_http::FormData;

/// A source of raw submitted values, looked up by field name.
pub trait ValueProvider {
    /// Returns the submitted value for `key`, or `None` if it was not submitted.
    fn get_value(&self, key: &str) -> Option<&str>;
}

impl ValueProvider for FormData {
    fn get_value(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl ValueProvider for HashMap<String, String> {
    fn get_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<P: ValueProvider + ?Sized> ValueProvider for &P {
    fn get_value(&self, key: &str) -> Option<&str> {
        (**self).get_value(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_data_provider() {
        let form = FormData::parse("Date.Day=3");
        assert_eq!(form.get_value("date.day"), Some("3"));
        assert_eq!(form.get_value("Date.Month"), None);
    }

    #[test]
    fn test_hash_map_provider() {
        let mut values = HashMap::new();
        values.insert("Date.Year".to_string(), "2020".to_string());
        assert_eq!(values.get_value("Date.Year"), Some("2020"));
        assert_eq!((&values).get_value("Date.Day"), None);
    }
}

//! Submitted form values.
//!
//! [`FormData`] holds the name/value pairs of a form submission in the order
//! they were submitted. Field names are matched ASCII case-insensitively, so
//! `DateOfBirth.Day` and `dateofbirth.day` refer to the same field.

/// The decoded values of a form submission.
///
/// A field may be submitted more than once; [`get`](FormData::get) returns the
/// last value.
///
/// # Examples
///
/// ```
/// use govuk_frontend_http::FormData;
///
/// let form = FormData::parse("DateOfBirth.Day=1&DateOfBirth.Month=jan&DateOfBirth.Year=2000");
/// assert_eq!(form.get("DateOfBirth.Day"), Some("1"));
/// assert_eq!(form.get("dateofbirth.month"), Some("jan"));
/// assert_eq!(form.get("DateOfBirth.Hour"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    /// Parses an `application/x-www-form-urlencoded` body. `+` decodes to a
    /// space and percent sequences are decoded.
    pub fn parse(body: &str) -> Self {
        let pairs = url::form_urlencoded::parse(body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Self { pairs }
    }

    /// Builds a `FormData` from name/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the last value submitted for `name`, or `None` if the field was
    /// not submitted.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `name` was submitted at least once.
    pub fn contains_key(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Returns the number of submitted pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over the submitted pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

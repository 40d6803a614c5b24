//! Post form validation.
//!
//! The post store accepts whatever it is given, so every caller that takes
//! user input runs [`validate_form`] first.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::Url;

use folio_core::domain::BlogPostFormData;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const CONTENT_REQUIRED: &str = "Content is required";
pub const INVALID_URL: &str = "Please enter a valid URL";

/// Field name to message, one message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    /// Messages as `field: message`, in field order.
    pub fn messages(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Check the form: title and content must be non-blank, and the image URL,
/// when given, must be an absolute URL.
pub fn validate_form(form: &BlogPostFormData) -> Result<(), ValidationErrors> {
    let mut errors = BTreeMap::new();

    if form.title.trim().is_empty() {
        errors.insert("title", TITLE_REQUIRED);
    }
    if form.content.trim().is_empty() {
        errors.insert("content", CONTENT_REQUIRED);
    }
    if !is_valid_url(&form.img_url) {
        errors.insert("imgUrl", INVALID_URL);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// `true` for an empty string (the field is optional) or any absolute URL.
///
/// The scheme is not restricted, so `ftp://example` passes.
pub fn is_valid_url(url: &str) -> bool {
    url.is_empty() || Url::parse(url).is_ok()
}

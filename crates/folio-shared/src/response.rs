//! Error response body (RFC 7807 problem details).

use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Per-field messages for a rejected post form.
    #[serde(default, skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub errors: std::collections::BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            errors: Default::default(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        let mut response = Self::new(422, "Validation Failed").with_detail(errors.to_string());
        response.errors = errors
            .fields()
            .map(|(field, message)| (field.to_string(), message.to_string()))
            .collect();
        response
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use folio_core::domain::BlogPostFormData;

    use super::*;
    use crate::validation::validate_form;

    #[test]
    fn test_not_found_body() {
        let body = serde_json::to_value(ErrorResponse::not_found("Post 7 not found")).unwrap();
        assert_eq!(body["type"], "about:blank");
        assert_eq!(body["status"], 404);
        assert_eq!(body["detail"], "Post 7 not found");
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let errors = validate_form(&BlogPostFormData::new("", "", "")).unwrap_err();
        let body = serde_json::to_value(ErrorResponse::validation(&errors)).unwrap();

        assert_eq!(body["status"], 422);
        assert_eq!(body["errors"]["title"], "Title is required");
        assert_eq!(body["errors"]["content"], "Content is required");
    }
}

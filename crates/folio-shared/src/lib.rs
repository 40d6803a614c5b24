//! # Folio Shared
//!
//! Types shared between the post store and whatever presents it: request and
//! response DTOs, post form validation and display formatting.

pub mod dto;
pub mod format;
pub mod response;
pub mod validation;

pub use response::ErrorResponse;
pub use validation::{ValidationErrors, is_valid_url, validate_form};

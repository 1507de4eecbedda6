//! Shared HTTP error payload.

use std::collections::BTreeMap;

use serde::Serialize;

/// Standard error body: a human message, plus per-field messages when the
/// failure is a validation one.
///
/// ```json
/// { "message": "Bad Request", "errors": { "price": "Price per day must be a positive number" } }
/// { "message": "Spot couldn't be found" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    /// Plain error with just a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    /// Validation error carrying the violated field rules.
    pub fn validation(errors: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            message: "Bad Request".to_string(),
            errors: Some(errors.into_iter().collect()),
        }
    }

    /// Generic failure that leaks no internals.
    pub fn internal() -> Self {
        Self::message("Internal Server Error")
    }
}

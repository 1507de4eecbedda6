//! Spot-specific error types.

use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode, SpotId, SpotImageId};

/// Terminal outcomes of spot operations.
///
/// Once a handler produces one of these, the request ends - the HTTP
/// layer dispatches on the variant exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum SpotError {
    /// Spot was not found.
    NotFound(SpotId),
    /// Image was not found under the spot.
    ImageNotFound(SpotImageId),
    /// User is not the owner.
    Forbidden,
    /// Validation failed; one entry per violated field rule.
    ValidationFailed { errors: HashMap<String, String> },
    /// Blob storage failure while handling an upload.
    Storage(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl SpotError {
    pub fn not_found(id: SpotId) -> Self {
        SpotError::NotFound(id)
    }

    pub fn image_not_found(id: SpotImageId) -> Self {
        SpotError::ImageNotFound(id)
    }

    pub fn forbidden() -> Self {
        SpotError::Forbidden
    }

    pub fn storage(message: impl Into<String>) -> Self {
        SpotError::Storage(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SpotError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SpotError::NotFound(_) => ErrorCode::SpotNotFound,
            SpotError::ImageNotFound(_) => ErrorCode::SpotImageNotFound,
            SpotError::Forbidden => ErrorCode::Forbidden,
            SpotError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SpotError::Storage(_) => ErrorCode::StorageError,
            SpotError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SpotError::NotFound(_) => "Spot couldn't be found".to_string(),
            SpotError::ImageNotFound(_) => "Spot Image couldn't be found".to_string(),
            SpotError::Forbidden => "Forbidden".to_string(),
            SpotError::ValidationFailed { .. } => "Bad Request".to_string(),
            SpotError::Storage(msg) => format!("Upload failed: {}", msg),
            SpotError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SpotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SpotError {}

impl From<DomainError> for SpotError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => SpotError::Forbidden,
            ErrorCode::ValidationFailed => SpotError::ValidationFailed {
                errors: err.details,
            },
            ErrorCode::StorageError => SpotError::Storage(err.message),
            _ => SpotError::Infrastructure(err.to_string()),
        }
    }
}

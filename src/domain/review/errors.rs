//! Review-specific error types.

use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode, ReviewId, ReviewImageId, SpotId};

/// Terminal outcomes of review operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewError {
    /// Review was not found.
    NotFound(ReviewId),
    /// The spot being reviewed was not found.
    SpotNotFound(SpotId),
    /// Image was not found under the review.
    ImageNotFound(ReviewImageId),
    /// User is not the author.
    Forbidden,
    /// The user already holds a review for this spot.
    AlreadyReviewed,
    /// The review already holds the maximum number of images.
    ImageLimitReached,
    /// Validation failed; one entry per violated field rule.
    ValidationFailed { errors: HashMap<String, String> },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ReviewError {
    pub fn not_found(id: ReviewId) -> Self {
        ReviewError::NotFound(id)
    }

    pub fn spot_not_found(id: SpotId) -> Self {
        ReviewError::SpotNotFound(id)
    }

    pub fn image_not_found(id: ReviewImageId) -> Self {
        ReviewError::ImageNotFound(id)
    }

    pub fn forbidden() -> Self {
        ReviewError::Forbidden
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReviewError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReviewError::NotFound(_) => ErrorCode::ReviewNotFound,
            ReviewError::SpotNotFound(_) => ErrorCode::SpotNotFound,
            ReviewError::ImageNotFound(_) => ErrorCode::ReviewImageNotFound,
            ReviewError::Forbidden => ErrorCode::Forbidden,
            ReviewError::AlreadyReviewed => ErrorCode::DuplicateReview,
            ReviewError::ImageLimitReached => ErrorCode::ImageLimitReached,
            ReviewError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReviewError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ReviewError::NotFound(_) => "Review couldn't be found".to_string(),
            ReviewError::SpotNotFound(_) => "Spot couldn't be found".to_string(),
            ReviewError::ImageNotFound(_) => "Review Image couldn't be found".to_string(),
            ReviewError::Forbidden => "Forbidden".to_string(),
            ReviewError::AlreadyReviewed => {
                "User already has a review for this spot".to_string()
            }
            ReviewError::ImageLimitReached => {
                "Maximum number of images for this resource was reached".to_string()
            }
            ReviewError::ValidationFailed { .. } => "Bad Request".to_string(),
            ReviewError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ReviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReviewError {}

impl From<DomainError> for ReviewError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => ReviewError::Forbidden,
            ErrorCode::DuplicateReview => ReviewError::AlreadyReviewed,
            ErrorCode::ValidationFailed => ReviewError::ValidationFailed {
                errors: err.details,
            },
            _ => ReviewError::Infrastructure(err.to_string()),
        }
    }
}

//! HTTP DTOs for review endpoints.
//!
//! Field names follow the public API contract: camelCase keys, the review
//! text under `review`, and list envelopes with capitalized keys.

use serde::{Deserialize, Serialize};

use crate::application::handlers::review::ReviewView;
use crate::domain::review::{Review, ReviewImage};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body for creating or editing a review.
///
/// `stars` is taken as a wide integer so out-of-range values reach the
/// domain validator and get the contract message instead of a serde error.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewContentRequest {
    pub review: String,
    pub stars: i64,
}

impl ReviewContentRequest {
    /// Narrows `stars` for the domain; anything unrepresentable becomes 0,
    /// which the validator rejects with the proper message.
    pub fn stars_raw(&self) -> u8 {
        u8::try_from(self.stars).unwrap_or(0)
    }
}

/// Body for attaching an image to a review.
#[derive(Debug, Clone, Deserialize)]
pub struct AddReviewImageRequest {
    pub url: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A review as returned by create/update endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub spot_id: String,
    pub user_id: String,
    pub review: String,
    pub stars: u8,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id().to_string(),
            spot_id: review.spot_id().to_string(),
            user_id: review.user_id().to_string(),
            review: review.body().to_string(),
            stars: review.stars().value(),
            created_at: review.created_at().to_rfc3339(),
            updated_at: review.updated_at().to_rfc3339(),
        }
    }
}

/// Nested image entry inside a review listing.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewImageSummary {
    pub id: String,
    pub url: String,
}

impl From<&ReviewImage> for ReviewImageSummary {
    fn from(image: &ReviewImage) -> Self {
        Self {
            id: image.id().to_string(),
            url: image.url().to_string(),
        }
    }
}

/// A review with its images, as it appears in a spot's review list.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewWithImagesResponse {
    #[serde(flatten)]
    pub review: ReviewResponse,
    #[serde(rename = "ReviewImages")]
    pub images: Vec<ReviewImageSummary>,
}

impl From<ReviewView> for ReviewWithImagesResponse {
    fn from(view: ReviewView) -> Self {
        Self {
            review: ReviewResponse::from(&view.review),
            images: view.images.iter().map(ReviewImageSummary::from).collect(),
        }
    }
}

/// Envelope for a spot's review list.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewListResponse {
    #[serde(rename = "Reviews")]
    pub reviews: Vec<ReviewWithImagesResponse>,
}

/// A newly attached review image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewImageResponse {
    pub id: String,
    pub review_id: String,
    pub url: String,
    pub created_at: String,
}

impl From<&ReviewImage> for ReviewImageResponse {
    fn from(image: &ReviewImage) -> Self {
        Self {
            id: image.id().to_string(),
            review_id: image.review_id().to_string(),
            url: image.url().to_string(),
            created_at: image.created_at().to_rfc3339(),
        }
    }
}

/// Body for successful deletes.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Successfully deleted".to_string(),
        }
    }
}

//! Image attached to a review.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReviewId, ReviewImageId, Timestamp};

/// Maximum number of images one review may hold.
pub const MAX_IMAGES_PER_REVIEW: usize = 10;

/// An image attached to a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewImage {
    id: ReviewImageId,
    review_id: ReviewId,
    url: String,
    created_at: Timestamp,
}

impl ReviewImage {
    pub fn new(id: ReviewImageId, review_id: ReviewId, url: String) -> Self {
        Self {
            id,
            review_id,
            url,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute from persistence.
    pub fn reconstitute(
        id: ReviewImageId,
        review_id: ReviewId,
        url: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            review_id,
            url,
            created_at,
        }
    }

    pub fn id(&self) -> &ReviewImageId {
        &self.id
    }

    pub fn review_id(&self) -> &ReviewId {
        &self.review_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_links_to_review() {
        let review_id = ReviewId::new();
        let image = ReviewImage::new(
            ReviewImageId::new(),
            review_id,
            "https://cdn.example.com/r.jpg".to_string(),
        );
        assert_eq!(image.review_id(), &review_id);
        assert_eq!(image.url(), "https://cdn.example.com/r.jpg");
    }
}

//! AddReviewImageHandler - Command handler for attaching an image to a review.

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, ReviewId, ReviewImageId, UserId};
use crate::domain::review::{ReviewError, ReviewImage, MAX_IMAGES_PER_REVIEW};
use crate::ports::{ReviewImageRepository, ReviewRepository};

/// Command to attach an image URL to a review.
#[derive(Debug, Clone)]
pub struct AddReviewImageCommand {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub url: String,
}

/// Handler for attaching review images.
pub struct AddReviewImageHandler {
    reviews: Arc<dyn ReviewRepository>,
    review_images: Arc<dyn ReviewImageRepository>,
}

impl AddReviewImageHandler {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        review_images: Arc<dyn ReviewImageRepository>,
    ) -> Self {
        Self {
            reviews,
            review_images,
        }
    }

    pub async fn handle(&self, cmd: AddReviewImageCommand) -> Result<ReviewImage, ReviewError> {
        // 1. Locate the parent review
        let review = self
            .reviews
            .find_by_id(&cmd.review_id)
            .await?
            .ok_or_else(|| ReviewError::not_found(cmd.review_id))?;

        // 2. Authorize against the author
        review.check_ownership(&cmd.user_id)?;

        // 3. Limit check: a review holds at most 10 images
        let count = self.review_images.count_by_review(&cmd.review_id).await?;
        if count >= MAX_IMAGES_PER_REVIEW {
            return Err(ReviewError::ImageLimitReached);
        }

        // 4. Mutate
        let image = ReviewImage::new(ReviewImageId::new(), cmd.review_id, cmd.url);
        self.review_images.save(&image).await?;

        Ok(image)
    }
}

//! DeleteReviewImageHandler - Command handler for removing a review image.

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, ReviewId, ReviewImageId, UserId};
use crate::domain::review::ReviewError;
use crate::ports::{ReviewImageRepository, ReviewRepository};

/// Command to delete an image from a review.
#[derive(Debug, Clone)]
pub struct DeleteReviewImageCommand {
    pub review_id: ReviewId,
    pub image_id: ReviewImageId,
    pub user_id: UserId,
}

/// Handler for deleting review images.
pub struct DeleteReviewImageHandler {
    reviews: Arc<dyn ReviewRepository>,
    review_images: Arc<dyn ReviewImageRepository>,
}

impl DeleteReviewImageHandler {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        review_images: Arc<dyn ReviewImageRepository>,
    ) -> Self {
        Self {
            reviews,
            review_images,
        }
    }

    pub async fn handle(&self, cmd: DeleteReviewImageCommand) -> Result<(), ReviewError> {
        // 1. Locate the parent review
        let review = self
            .reviews
            .find_by_id(&cmd.review_id)
            .await?
            .ok_or_else(|| ReviewError::not_found(cmd.review_id))?;

        // 2. Authorize against the author
        review.check_ownership(&cmd.user_id)?;

        // 3. Locate the image under this review
        let image = self
            .review_images
            .find_by_id_and_review(&cmd.image_id, &cmd.review_id)
            .await?
            .ok_or_else(|| ReviewError::image_not_found(cmd.image_id))?;

        // 4. Destroy
        self.review_images.delete(image.id()).await?;

        Ok(())
    }
}

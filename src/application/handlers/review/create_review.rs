//! CreateReviewHandler - Command handler for reviewing a spot.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ReviewId, SpotId, UserId};
use crate::domain::review::{validate_review_content, Review, ReviewError};
use crate::ports::{ReviewRepository, SpotRepository};

use super::rating_refresh::SpotRatingRefresher;

/// Command to create a review for a spot.
#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    pub spot_id: SpotId,
    pub user_id: UserId,
    pub body: String,
    pub stars: u8,
}

/// Handler for creating reviews.
pub struct CreateReviewHandler {
    spots: Arc<dyn SpotRepository>,
    reviews: Arc<dyn ReviewRepository>,
    refresher: Arc<SpotRatingRefresher>,
}

impl CreateReviewHandler {
    pub fn new(
        spots: Arc<dyn SpotRepository>,
        reviews: Arc<dyn ReviewRepository>,
        refresher: Arc<SpotRatingRefresher>,
    ) -> Self {
        Self {
            spots,
            reviews,
            refresher,
        }
    }

    pub async fn handle(&self, cmd: CreateReviewCommand) -> Result<Review, ReviewError> {
        // 1. Validate before touching storage
        validate_review_content(&cmd.body, cmd.stars)
            .map_err(|errors| ReviewError::from(DomainError::validation_errors(errors)))?;

        // 2. Locate the spot being reviewed
        if self.spots.find_by_id(&cmd.spot_id).await?.is_none() {
            return Err(ReviewError::spot_not_found(cmd.spot_id));
        }

        // 3. Uniqueness: one review per (user, spot). The storage
        //    constraint backs this check against concurrent creates.
        if self
            .reviews
            .find_by_user_and_spot(&cmd.user_id, &cmd.spot_id)
            .await?
            .is_some()
        {
            return Err(ReviewError::AlreadyReviewed);
        }

        // 4. Mutate
        let review = Review::new(
            ReviewId::new(),
            cmd.spot_id,
            cmd.user_id,
            cmd.body,
            cmd.stars,
        )?;
        self.reviews.save(&review).await?;

        // 5. The spot's review set changed; recompute its summary
        self.refresher.refresh(cmd.spot_id).await?;

        Ok(review)
    }
}

//! DeleteReviewHandler - Command handler for deleting a review.

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, ReviewId, UserId};
use crate::domain::review::ReviewError;
use crate::ports::ReviewRepository;

use super::rating_refresh::SpotRatingRefresher;

/// Command to delete a review.
#[derive(Debug, Clone)]
pub struct DeleteReviewCommand {
    pub review_id: ReviewId,
    pub user_id: UserId,
}

/// Handler for deleting reviews.
///
/// Deletion shrinks the spot's review set, so the summary is recomputed
/// afterwards - a deleted review must not linger in the average.
pub struct DeleteReviewHandler {
    reviews: Arc<dyn ReviewRepository>,
    refresher: Arc<SpotRatingRefresher>,
}

impl DeleteReviewHandler {
    pub fn new(reviews: Arc<dyn ReviewRepository>, refresher: Arc<SpotRatingRefresher>) -> Self {
        Self { reviews, refresher }
    }

    pub async fn handle(&self, cmd: DeleteReviewCommand) -> Result<(), ReviewError> {
        // 1. Locate
        let review = self
            .reviews
            .find_by_id(&cmd.review_id)
            .await?
            .ok_or_else(|| ReviewError::not_found(cmd.review_id))?;

        // 2. Authorize - only the author may delete
        review.check_ownership(&cmd.user_id)?;

        // 3. Destroy
        let spot_id = *review.spot_id();
        self.reviews.delete(&cmd.review_id).await?;

        // 4. Recompute the spot's summary over the shrunken set
        self.refresher.refresh(spot_id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{
        InMemoryReviewRepository, InMemorySpotRepository, InMemoryStore,
    };
    use crate::domain::foundation::SpotId;
    use crate::domain::review::Review;
    use crate::domain::spot::{Spot, SpotDetails};
    use crate::ports::SpotRepository as _;

    struct Fixture {
        handler: DeleteReviewHandler,
        spots: Arc<InMemorySpotRepository>,
        reviews: Arc<InMemoryReviewRepository>,
        spot_id: SpotId,
        review_id: ReviewId,
    }

    fn author() -> UserId {
        UserId::new("guest-1").unwrap()
    }

    async fn fixture() -> Fixture {
        let store = InMemoryStore::new();
        let spots = Arc::new(InMemorySpotRepository::new(store.clone()));
        let reviews = Arc::new(InMemoryReviewRepository::new(store));
        let refresher = Arc::new(SpotRatingRefresher::new(spots.clone(), reviews.clone()));

        let spot = Spot::new(
            SpotId::new(),
            UserId::new("host-1").unwrap(),
            SpotDetails {
                address: "8 Canyon Rd".to_string(),
                city: "Moab".to_string(),
                state: "UT".to_string(),
                country: "USA".to_string(),
                name: "Canyon Base".to_string(),
                description: "Basecamp for the canyons".to_string(),
                price: 120.0,
            },
        )
        .unwrap();
        spots.save(&spot).await.unwrap();

        let review = Review::new(
            ReviewId::new(),
            *spot.id(),
            author(),
            "Dusty but great".to_string(),
            4,
        )
        .unwrap();
        reviews.save(&review).await.unwrap();
        refresher.refresh(*spot.id()).await.unwrap();

        Fixture {
            handler: DeleteReviewHandler::new(reviews.clone(), refresher),
            spots,
            reviews,
            spot_id: *spot.id(),
            review_id: *review.id(),
        }
    }

    #[tokio::test]
    async fn author_deletes_review_and_aggregate_resets() {
        let f = fixture().await;

        // Sanity: the aggregate currently counts the review.
        let spot = f.spots.find_by_id(&f.spot_id).await.unwrap().unwrap();
        assert_eq!(spot.rating().count(), 1);

        f.handler
            .handle(DeleteReviewCommand {
                review_id: f.review_id,
                user_id: author(),
            })
            .await
            .unwrap();

        assert!(f.reviews.find_by_id(&f.review_id).await.unwrap().is_none());
        let spot = f.spots.find_by_id(&f.spot_id).await.unwrap().unwrap();
        assert_eq!(spot.rating().count(), 0);
        assert_eq!(spot.rating().average(), None);
    }

    #[tokio::test]
    async fn non_author_is_forbidden_and_review_survives() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(DeleteReviewCommand {
                review_id: f.review_id,
                user_id: UserId::new("intruder").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(ReviewError::Forbidden)));
        assert!(f.reviews.find_by_id(&f.review_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn missing_review_is_not_found() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(DeleteReviewCommand {
                review_id: ReviewId::new(),
                user_id: author(),
            })
            .await;

        assert!(matches!(result, Err(ReviewError::NotFound(_))));
    }
}

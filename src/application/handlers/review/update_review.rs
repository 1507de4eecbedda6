//! UpdateReviewHandler - Command handler for editing a review.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OwnedByUser, ReviewId, UserId};
use crate::domain::review::{validate_review_content, Review, ReviewError};
use crate::ports::ReviewRepository;

use super::rating_refresh::SpotRatingRefresher;

/// Command to edit a review's body and stars.
#[derive(Debug, Clone)]
pub struct UpdateReviewCommand {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub body: String,
    pub stars: u8,
}

/// Handler for editing reviews.
///
/// An edit can change the stars, so the spot's summary is recomputed
/// afterwards just like on create and delete.
pub struct UpdateReviewHandler {
    reviews: Arc<dyn ReviewRepository>,
    refresher: Arc<SpotRatingRefresher>,
}

impl UpdateReviewHandler {
    pub fn new(reviews: Arc<dyn ReviewRepository>, refresher: Arc<SpotRatingRefresher>) -> Self {
        Self { reviews, refresher }
    }

    pub async fn handle(&self, cmd: UpdateReviewCommand) -> Result<Review, ReviewError> {
        // 1. Validate before touching storage
        validate_review_content(&cmd.body, cmd.stars)
            .map_err(|errors| ReviewError::from(DomainError::validation_errors(errors)))?;

        // 2. Locate
        let mut review = self
            .reviews
            .find_by_id(&cmd.review_id)
            .await?
            .ok_or_else(|| ReviewError::not_found(cmd.review_id))?;

        // 3. Authorize - only the author may edit
        review.check_ownership(&cmd.user_id)?;

        // 4. Mutate and persist
        review.edit(cmd.body, cmd.stars)?;
        self.reviews.update(&review).await?;

        // 5. Stars may have changed; recompute the spot's summary
        self.refresher.refresh(*review.spot_id()).await?;

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{
        InMemoryReviewRepository, InMemorySpotRepository, InMemoryStore,
    };
    use crate::domain::foundation::SpotId;
    use crate::domain::spot::{Spot, SpotDetails};
    use crate::ports::SpotRepository as _;

    struct Fixture {
        handler: UpdateReviewHandler,
        spots: Arc<InMemorySpotRepository>,
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
                address: "11 Harbor St".to_string(),
                city: "Portland".to_string(),
                state: "ME".to_string(),
                country: "USA".to_string(),
                name: "Harbor Flat".to_string(),
                description: "Flat above the harbor".to_string(),
                price: 140.0,
            },
        )
        .unwrap();
        spots.save(&spot).await.unwrap();

        let review = Review::new(
            ReviewId::new(),
            *spot.id(),
            author(),
            "Good location".to_string(),
            5,
        )
        .unwrap();
        reviews.save(&review).await.unwrap();
        refresher.refresh(*spot.id()).await.unwrap();

        Fixture {
            handler: UpdateReviewHandler::new(reviews, refresher),
            spots,
            spot_id: *spot.id(),
            review_id: *review.id(),
        }
    }

    #[tokio::test]
    async fn author_edits_review_and_rating_follows() {
        let f = fixture().await;

        let updated = f
            .handler
            .handle(UpdateReviewCommand {
                review_id: f.review_id,
                user_id: author(),
                body: "Noisy at night".to_string(),
                stars: 2,
            })
            .await
            .unwrap();

        assert_eq!(updated.stars().value(), 2);
        assert_eq!(updated.body(), "Noisy at night");

        let spot = f.spots.find_by_id(&f.spot_id).await.unwrap().unwrap();
        assert_eq!(spot.rating().count(), 1);
        assert_eq!(spot.rating().average(), Some(2.0));
    }

    #[tokio::test]
    async fn non_author_is_forbidden() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(UpdateReviewCommand {
                review_id: f.review_id,
                user_id: UserId::new("intruder").unwrap(),
                body: "Hijacked".to_string(),
                stars: 1,
            })
            .await;

        assert!(matches!(result, Err(ReviewError::Forbidden)));

        // The persisted aggregate is untouched.
        let spot = f.spots.find_by_id(&f.spot_id).await.unwrap().unwrap();
        assert_eq!(spot.rating().average(), Some(5.0));
    }

    #[tokio::test]
    async fn missing_review_is_not_found() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(UpdateReviewCommand {
                review_id: ReviewId::new(),
                user_id: author(),
                body: "Fine".to_string(),
                stars: 3,
            })
            .await;

        assert!(matches!(result, Err(ReviewError::NotFound(_))));
    }

    #[tokio::test]
    async fn invalid_content_is_rejected_up_front() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(UpdateReviewCommand {
                review_id: f.review_id,
                user_id: author(),
                body: String::new(),
                stars: 7,
            })
            .await;

        assert!(matches!(result, Err(ReviewError::ValidationFailed { .. })));
    }
}

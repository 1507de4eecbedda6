//! ListSpotReviewsHandler - Query handler for a spot's reviews.

use std::sync::Arc;

use crate::domain::foundation::SpotId;
use crate::domain::review::{Review, ReviewError, ReviewImage};
use crate::ports::{ReviewImageRepository, ReviewRepository, SpotRepository};

/// Query for all reviews of one spot.
#[derive(Debug, Clone)]
pub struct ListSpotReviewsQuery {
    pub spot_id: SpotId,
}

/// A review with its attached images.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub review: Review,
    pub images: Vec<ReviewImage>,
}

/// Handler for listing a spot's reviews.
///
/// A spot with no reviews yields an empty list; only a missing spot is a
/// NotFound outcome.
pub struct ListSpotReviewsHandler {
    spots: Arc<dyn SpotRepository>,
    reviews: Arc<dyn ReviewRepository>,
    review_images: Arc<dyn ReviewImageRepository>,
}

impl ListSpotReviewsHandler {
    pub fn new(
        spots: Arc<dyn SpotRepository>,
        reviews: Arc<dyn ReviewRepository>,
        review_images: Arc<dyn ReviewImageRepository>,
    ) -> Self {
        Self {
            spots,
            reviews,
            review_images,
        }
    }

    pub async fn handle(&self, query: ListSpotReviewsQuery) -> Result<Vec<ReviewView>, ReviewError> {
        // 1. Locate the spot; an empty review set is not a missing spot
        if self.spots.find_by_id(&query.spot_id).await?.is_none() {
            return Err(ReviewError::spot_not_found(query.spot_id));
        }

        // 2. Load reviews and attach images
        let reviews = self.reviews.find_by_spot(&query.spot_id).await?;
        let mut views = Vec::with_capacity(reviews.len());
        for review in reviews {
            let images = self.review_images.find_by_review(review.id()).await?;
            views.push(ReviewView { review, images });
        }

        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{
        InMemoryReviewImageRepository, InMemoryReviewRepository, InMemorySpotRepository,
        InMemoryStore,
    };
    use crate::domain::foundation::{ReviewId, ReviewImageId, UserId};
    use crate::domain::spot::{Spot, SpotDetails};

    async fn fixture() -> (
        ListSpotReviewsHandler,
        Arc<InMemoryReviewRepository>,
        Arc<InMemoryReviewImageRepository>,
        SpotId,
    ) {
        let store = InMemoryStore::new();
        let spots = Arc::new(InMemorySpotRepository::new(store.clone()));
        let reviews = Arc::new(InMemoryReviewRepository::new(store.clone()));
        let images = Arc::new(InMemoryReviewImageRepository::new(store));

        let spot = Spot::new(
            SpotId::new(),
            UserId::new("host-1").unwrap(),
            SpotDetails {
                address: "5 River Rd".to_string(),
                city: "Asheville".to_string(),
                state: "NC".to_string(),
                country: "USA".to_string(),
                name: "River House".to_string(),
                description: "On the French Broad".to_string(),
                price: 150.0,
            },
        )
        .unwrap();
        spots.save(&spot).await.unwrap();

        (
            ListSpotReviewsHandler::new(spots, reviews.clone(), images.clone()),
            reviews,
            images,
            *spot.id(),
        )
    }

    #[tokio::test]
    async fn spot_with_no_reviews_yields_empty_list() {
        let (handler, _, _, spot_id) = fixture().await;
        let views = handler
            .handle(ListSpotReviewsQuery { spot_id })
            .await
            .unwrap();
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn missing_spot_is_not_found() {
        let (handler, _, _, _) = fixture().await;
        let result = handler
            .handle(ListSpotReviewsQuery {
                spot_id: SpotId::new(),
            })
            .await;
        assert!(matches!(result, Err(ReviewError::SpotNotFound(_))));
    }

    #[tokio::test]
    async fn reviews_come_back_with_their_images() {
        let (handler, reviews, images, spot_id) = fixture().await;

        let review = Review::new(
            ReviewId::new(),
            spot_id,
            UserId::new("guest-1").unwrap(),
            "Heard the river all night".to_string(),
            5,
        )
        .unwrap();
        reviews.save(&review).await.unwrap();
        images
            .save(&ReviewImage::new(
                ReviewImageId::new(),
                *review.id(),
                "https://cdn.example.com/river.jpg".to_string(),
            ))
            .await
            .unwrap();

        let views = handler
            .handle(ListSpotReviewsQuery { spot_id })
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].images.len(), 1);
        assert_eq!(views[0].images[0].url(), "https://cdn.example.com/river.jpg");
    }
}

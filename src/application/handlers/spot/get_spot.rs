//! GetSpotHandler - Query handler for spot details.

use std::sync::Arc;

use crate::domain::foundation::SpotId;
use crate::domain::spot::{RatingSummary, Spot, SpotError, SpotImage};
use crate::ports::{ReviewRepository, SpotImageRepository, SpotRepository};

/// Query for one spot's full detail view.
#[derive(Debug, Clone)]
pub struct GetSpotQuery {
    pub spot_id: SpotId,
}

/// Detail view: the spot, its images, and a review summary recomputed
/// from the current review set rather than read from the denormalized
/// columns.
#[derive(Debug, Clone)]
pub struct SpotView {
    pub spot: Spot,
    pub images: Vec<SpotImage>,
    pub rating: RatingSummary,
}

/// Handler for fetching spot details.
pub struct GetSpotHandler {
    spots: Arc<dyn SpotRepository>,
    reviews: Arc<dyn ReviewRepository>,
    spot_images: Arc<dyn SpotImageRepository>,
}

impl GetSpotHandler {
    pub fn new(
        spots: Arc<dyn SpotRepository>,
        reviews: Arc<dyn ReviewRepository>,
        spot_images: Arc<dyn SpotImageRepository>,
    ) -> Self {
        Self {
            spots,
            reviews,
            spot_images,
        }
    }

    pub async fn handle(&self, query: GetSpotQuery) -> Result<SpotView, SpotError> {
        // 1. Locate
        let spot = self
            .spots
            .find_by_id(&query.spot_id)
            .await?
            .ok_or_else(|| SpotError::not_found(query.spot_id))?;

        // 2. Load the review set once and aggregate over it
        let reviews = self.reviews.find_by_spot(&query.spot_id).await?;
        let stars: Vec<_> = reviews.iter().map(|r| r.stars()).collect();
        let rating = RatingSummary::from_stars(&stars);

        // 3. Attach images
        let images = self.spot_images.find_by_spot(&query.spot_id).await?;

        Ok(SpotView {
            spot,
            images,
            rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{
        InMemoryReviewRepository, InMemorySpotImageRepository, InMemorySpotRepository,
        InMemoryStore,
    };
    use crate::domain::foundation::{ReviewId, SpotImageId, UserId};
    use crate::domain::review::Review;
    use crate::domain::spot::SpotDetails;

    struct Fixture {
        handler: GetSpotHandler,
        reviews: Arc<InMemoryReviewRepository>,
        images: Arc<InMemorySpotImageRepository>,
        spot_id: SpotId,
    }

    async fn fixture() -> Fixture {
        let store = InMemoryStore::new();
        let spots = Arc::new(InMemorySpotRepository::new(store.clone()));
        let reviews = Arc::new(InMemoryReviewRepository::new(store.clone()));
        let images = Arc::new(InMemorySpotImageRepository::new(store));

        let spot = Spot::new(
            SpotId::new(),
            UserId::new("host-1").unwrap(),
            SpotDetails {
                address: "2 Pine St".to_string(),
                city: "Boise".to_string(),
                state: "ID".to_string(),
                country: "USA".to_string(),
                name: "Pine Cottage".to_string(),
                description: "Cottage under the pines".to_string(),
                price: 110.0,
            },
        )
        .unwrap();
        spots.save(&spot).await.unwrap();

        Fixture {
            handler: GetSpotHandler::new(spots, reviews.clone(), images.clone()),
            reviews,
            images,
            spot_id: *spot.id(),
        }
    }

    async fn add_review(f: &Fixture, author: &str, stars: u8) {
        let review = Review::new(
            ReviewId::new(),
            f.spot_id,
            UserId::new(author).unwrap(),
            "Lovely".to_string(),
            stars,
        )
        .unwrap();
        f.reviews.save(&review).await.unwrap();
    }

    #[tokio::test]
    async fn missing_spot_is_not_found() {
        let f = fixture().await;
        let result = f
            .handler
            .handle(GetSpotQuery {
                spot_id: SpotId::new(),
            })
            .await;
        assert!(matches!(result, Err(SpotError::NotFound(_))));
    }

    #[tokio::test]
    async fn unreviewed_spot_reports_unrated() {
        let f = fixture().await;
        let view = f.handler.handle(GetSpotQuery { spot_id: f.spot_id }).await.unwrap();

        assert_eq!(view.rating.count(), 0);
        assert_eq!(view.rating.average(), None);
    }

    #[tokio::test]
    async fn rating_is_recomputed_from_the_live_review_set() {
        let f = fixture().await;
        add_review(&f, "guest-1", 5).await;
        add_review(&f, "guest-2", 4).await;
        add_review(&f, "guest-3", 3).await;

        let view = f.handler.handle(GetSpotQuery { spot_id: f.spot_id }).await.unwrap();
        assert_eq!(view.rating.count(), 3);
        assert_eq!(view.rating.average(), Some(4.0));
    }

    #[tokio::test]
    async fn images_are_attached() {
        use crate::domain::spot::SpotImage;

        let f = fixture().await;
        f.images
            .save(&SpotImage::new(
                SpotImageId::new(),
                f.spot_id,
                "https://cdn.example.com/1.jpg".to_string(),
                true,
            ))
            .await
            .unwrap();

        let view = f.handler.handle(GetSpotQuery { spot_id: f.spot_id }).await.unwrap();
        assert_eq!(view.images.len(), 1);
        assert!(view.images[0].is_preview());
    }
}

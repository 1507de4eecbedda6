//! In-memory repository adapters.
//!
//! All four repositories share one `InMemoryStore` so spot deletion can
//! cascade to reviews and images the way the database schema does. Used
//! by tests and by local development without a database.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{
    DomainError, ErrorCode, ReviewId, ReviewImageId, SpotId, SpotImageId, UserId,
};
use crate::domain::review::{Review, ReviewImage};
use crate::domain::spot::{Spot, SpotImage};
use crate::ports::{ReviewImageRepository, ReviewRepository, SpotImageRepository, SpotRepository};

/// Shared backing store for the in-memory repositories.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    spots: RwLock<Vec<Spot>>,
    reviews: RwLock<Vec<Review>>,
    spot_images: RwLock<Vec<SpotImage>>,
    review_images: RwLock<Vec<ReviewImage>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

/// In-memory implementation of SpotRepository.
#[derive(Clone)]
pub struct InMemorySpotRepository {
    store: Arc<InMemoryStore>,
}

impl InMemorySpotRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SpotRepository for InMemorySpotRepository {
    async fn save(&self, spot: &Spot) -> Result<(), DomainError> {
        self.store.spots.write().unwrap().push(spot.clone());
        Ok(())
    }

    async fn update(&self, spot: &Spot) -> Result<(), DomainError> {
        let mut spots = self.store.spots.write().unwrap();
        match spots.iter().position(|s| s.id() == spot.id()) {
            Some(pos) => {
                spots[pos] = spot.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SpotNotFound,
                format!("Spot not found: {}", spot.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &SpotId) -> Result<Option<Spot>, DomainError> {
        Ok(self
            .store
            .spots
            .read()
            .unwrap()
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Spot>, DomainError> {
        let mut spots = self.store.spots.read().unwrap().clone();
        spots.sort_by(|a, b| {
            a.created_at()
                .cmp(b.created_at())
                .then_with(|| a.id().to_string().cmp(&b.id().to_string()))
        });
        Ok(spots)
    }

    async fn delete(&self, id: &SpotId) -> Result<(), DomainError> {
        let mut spots = self.store.spots.write().unwrap();
        let Some(pos) = spots.iter().position(|s| s.id() == id) else {
            return Err(DomainError::new(
                ErrorCode::SpotNotFound,
                format!("Spot not found: {}", id),
            ));
        };
        spots.remove(pos);
        drop(spots);

        // Cascade: reviews of the spot, then images of both kinds.
        let removed_reviews: Vec<ReviewId> = {
            let mut reviews = self.store.reviews.write().unwrap();
            let removed = reviews
                .iter()
                .filter(|r| r.spot_id() == id)
                .map(|r| *r.id())
                .collect();
            reviews.retain(|r| r.spot_id() != id);
            removed
        };
        self.store
            .spot_images
            .write()
            .unwrap()
            .retain(|i| i.spot_id() != id);
        self.store
            .review_images
            .write()
            .unwrap()
            .retain(|i| !removed_reviews.contains(i.review_id()));
        Ok(())
    }
}

/// In-memory implementation of ReviewRepository.
#[derive(Clone)]
pub struct InMemoryReviewRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryReviewRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn save(&self, review: &Review) -> Result<(), DomainError> {
        let mut reviews = self.store.reviews.write().unwrap();
        // Mirrors the database's UNIQUE (user_id, spot_id) constraint.
        if reviews
            .iter()
            .any(|r| r.user_id() == review.user_id() && r.spot_id() == review.spot_id())
        {
            return Err(DomainError::new(
                ErrorCode::DuplicateReview,
                "User already has a review for this spot",
            ));
        }
        reviews.push(review.clone());
        Ok(())
    }

    async fn update(&self, review: &Review) -> Result<(), DomainError> {
        let mut reviews = self.store.reviews.write().unwrap();
        match reviews.iter().position(|r| r.id() == review.id()) {
            Some(pos) => {
                reviews[pos] = review.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ReviewNotFound,
                format!("Review not found: {}", review.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, DomainError> {
        Ok(self
            .store
            .reviews
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn find_by_spot(&self, spot_id: &SpotId) -> Result<Vec<Review>, DomainError> {
        let mut reviews: Vec<Review> = self
            .store
            .reviews
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.spot_id() == spot_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        Ok(reviews)
    }

    async fn find_by_user_and_spot(
        &self,
        user_id: &UserId,
        spot_id: &SpotId,
    ) -> Result<Option<Review>, DomainError> {
        Ok(self
            .store
            .reviews
            .read()
            .unwrap()
            .iter()
            .find(|r| r.user_id() == user_id && r.spot_id() == spot_id)
            .cloned())
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), DomainError> {
        let mut reviews = self.store.reviews.write().unwrap();
        let Some(pos) = reviews.iter().position(|r| r.id() == id) else {
            return Err(DomainError::new(
                ErrorCode::ReviewNotFound,
                format!("Review not found: {}", id),
            ));
        };
        reviews.remove(pos);
        drop(reviews);

        self.store
            .review_images
            .write()
            .unwrap()
            .retain(|i| i.review_id() != id);
        Ok(())
    }
}

/// In-memory implementation of SpotImageRepository.
#[derive(Clone)]
pub struct InMemorySpotImageRepository {
    store: Arc<InMemoryStore>,
}

impl InMemorySpotImageRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SpotImageRepository for InMemorySpotImageRepository {
    async fn save(&self, image: &SpotImage) -> Result<(), DomainError> {
        self.store.spot_images.write().unwrap().push(image.clone());
        Ok(())
    }

    async fn find_by_id_and_spot(
        &self,
        id: &SpotImageId,
        spot_id: &SpotId,
    ) -> Result<Option<SpotImage>, DomainError> {
        Ok(self
            .store
            .spot_images
            .read()
            .unwrap()
            .iter()
            .find(|i| i.id() == id && i.spot_id() == spot_id)
            .cloned())
    }

    async fn find_by_spot(&self, spot_id: &SpotId) -> Result<Vec<SpotImage>, DomainError> {
        let mut images: Vec<SpotImage> = self
            .store
            .spot_images
            .read()
            .unwrap()
            .iter()
            .filter(|i| i.spot_id() == spot_id)
            .cloned()
            .collect();
        images.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        Ok(images)
    }

    async fn delete(&self, id: &SpotImageId) -> Result<(), DomainError> {
        let mut images = self.store.spot_images.write().unwrap();
        match images.iter().position(|i| i.id() == id) {
            Some(pos) => {
                images.remove(pos);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SpotImageNotFound,
                format!("Spot image not found: {}", id),
            )),
        }
    }
}

/// In-memory implementation of ReviewImageRepository.
#[derive(Clone)]
pub struct InMemoryReviewImageRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryReviewImageRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewImageRepository for InMemoryReviewImageRepository {
    async fn save(&self, image: &ReviewImage) -> Result<(), DomainError> {
        self.store
            .review_images
            .write()
            .unwrap()
            .push(image.clone());
        Ok(())
    }

    async fn find_by_id_and_review(
        &self,
        id: &ReviewImageId,
        review_id: &ReviewId,
    ) -> Result<Option<ReviewImage>, DomainError> {
        Ok(self
            .store
            .review_images
            .read()
            .unwrap()
            .iter()
            .find(|i| i.id() == id && i.review_id() == review_id)
            .cloned())
    }

    async fn find_by_review(&self, review_id: &ReviewId) -> Result<Vec<ReviewImage>, DomainError> {
        let mut images: Vec<ReviewImage> = self
            .store
            .review_images
            .read()
            .unwrap()
            .iter()
            .filter(|i| i.review_id() == review_id)
            .cloned()
            .collect();
        images.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        Ok(images)
    }

    async fn count_by_review(&self, review_id: &ReviewId) -> Result<usize, DomainError> {
        Ok(self
            .store
            .review_images
            .read()
            .unwrap()
            .iter()
            .filter(|i| i.review_id() == review_id)
            .count())
    }

    async fn delete(&self, id: &ReviewImageId) -> Result<(), DomainError> {
        let mut images = self.store.review_images.write().unwrap();
        match images.iter().position(|i| i.id() == id) {
            Some(pos) => {
                images.remove(pos);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ReviewImageNotFound,
                format!("Review image not found: {}", id),
            )),
        }
    }
}

//! Image repository ports for spot and review attachments.

use crate::domain::foundation::{DomainError, ReviewId, ReviewImageId, SpotId, SpotImageId};
use crate::domain::review::ReviewImage;
use crate::domain::spot::SpotImage;
use async_trait::async_trait;

/// Repository port for spot image records.
#[async_trait]
pub trait SpotImageRepository: Send + Sync {
    /// Save a new image record.
    async fn save(&self, image: &SpotImage) -> Result<(), DomainError>;

    /// Find an image by ID, scoped to its parent spot.
    ///
    /// Returns `None` if the image doesn't exist or belongs to a
    /// different spot.
    async fn find_by_id_and_spot(
        &self,
        id: &SpotImageId,
        spot_id: &SpotId,
    ) -> Result<Option<SpotImage>, DomainError>;

    /// All images for a spot, ordered by created_at ascending.
    async fn find_by_spot(&self, spot_id: &SpotId) -> Result<Vec<SpotImage>, DomainError>;

    /// Delete an image record.
    async fn delete(&self, id: &SpotImageId) -> Result<(), DomainError>;
}

/// Repository port for review image records.
#[async_trait]
pub trait ReviewImageRepository: Send + Sync {
    /// Save a new image record.
    async fn save(&self, image: &ReviewImage) -> Result<(), DomainError>;

    /// Find an image by ID, scoped to its parent review.
    async fn find_by_id_and_review(
        &self,
        id: &ReviewImageId,
        review_id: &ReviewId,
    ) -> Result<Option<ReviewImage>, DomainError>;

    /// All images for a review, ordered by created_at ascending.
    async fn find_by_review(&self, review_id: &ReviewId) -> Result<Vec<ReviewImage>, DomainError>;

    /// Number of images currently attached to a review.
    async fn count_by_review(&self, review_id: &ReviewId) -> Result<usize, DomainError>;

    /// Delete an image record.
    async fn delete(&self, id: &ReviewImageId) -> Result<(), DomainError>;
}

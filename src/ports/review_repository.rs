//! Review repository port.
//!
//! The backing store must carry a uniqueness constraint on
//! `(user_id, spot_id)`: the handler-level duplicate check alone is a
//! time-of-check/time-of-use race under concurrent requests.

use crate::domain::foundation::{DomainError, ReviewId, SpotId, UserId};
use crate::domain::review::Review;
use async_trait::async_trait;

/// Repository port for Review aggregate persistence.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Save a new review.
    ///
    /// # Errors
    ///
    /// - `DuplicateReview` if the user already reviewed the spot
    ///   (storage-level constraint violation)
    /// - `DatabaseError` on persistence failure
    async fn save(&self, review: &Review) -> Result<(), DomainError>;

    /// Update an existing review.
    ///
    /// # Errors
    ///
    /// - `ReviewNotFound` if review doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, review: &Review) -> Result<(), DomainError>;

    /// Find a review by its ID.
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, DomainError>;

    /// Full review set for a spot, ordered by created_at ascending.
    async fn find_by_spot(&self, spot_id: &SpotId) -> Result<Vec<Review>, DomainError>;

    /// The user's review for a spot, if one exists.
    async fn find_by_user_and_spot(
        &self,
        user_id: &UserId,
        spot_id: &SpotId,
    ) -> Result<Option<Review>, DomainError>;

    /// Delete a review.
    ///
    /// # Errors
    ///
    /// - `ReviewNotFound` if review doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ReviewId) -> Result<(), DomainError>;
}

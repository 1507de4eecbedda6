//! Spot repository port.
//!
//! Defines the contract for persisting and retrieving Spot aggregates.
//! Implementations handle the actual database operations.

use crate::domain::foundation::{DomainError, SpotId};
use crate::domain::spot::Spot;
use async_trait::async_trait;

/// Repository port for Spot aggregate persistence.
#[async_trait]
pub trait SpotRepository: Send + Sync {
    /// Save a new spot.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, spot: &Spot) -> Result<(), DomainError>;

    /// Update an existing spot (details and denormalized rating).
    ///
    /// # Errors
    ///
    /// - `SpotNotFound` if spot doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, spot: &Spot) -> Result<(), DomainError>;

    /// Find a spot by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SpotId) -> Result<Option<Spot>, DomainError>;

    /// List every spot in a stable order (created_at, then id).
    ///
    /// Filtering and pagination are applied by the caller over the
    /// returned collection.
    async fn list_all(&self) -> Result<Vec<Spot>, DomainError>;

    /// Delete a spot. Associated reviews and images cascade.
    ///
    /// # Errors
    ///
    /// - `SpotNotFound` if spot doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &SpotId) -> Result<(), DomainError>;
}

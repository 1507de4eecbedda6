//! Spot aggregate entity.
//!
//! A spot is a rentable listing owned by exactly one user. It carries a
//! denormalized review summary (`rating`) that the review handlers keep in
//! sync by full recomputation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, FieldError, OwnedByUser, Price, SpotId, Timestamp, UserId,
};

use super::rating::RatingSummary;

/// Maximum length for a spot name.
pub const MAX_NAME_LENGTH: usize = 50;

/// Maximum length for a spot description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Raw listing fields as submitted by a client.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotDetails {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl SpotDetails {
    /// Checks every rule and returns the full violation list on failure.
    ///
    /// On success the parsed price is returned so callers never hold an
    /// unvalidated one. Handlers run this before touching storage, so a
    /// bad payload never reaches the locate step.
    pub fn validate(&self) -> Result<Price, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.address.trim().is_empty() {
            errors.push(FieldError::new("address", "Street address is required"));
        }
        if self.city.trim().is_empty() {
            errors.push(FieldError::new("city", "City is required"));
        }
        if self.state.trim().is_empty() {
            errors.push(FieldError::new("state", "State is required"));
        }
        if self.country.trim().is_empty() {
            errors.push(FieldError::new("country", "Country is required"));
        }
        if self.name.trim().is_empty() || self.name.trim().len() > MAX_NAME_LENGTH {
            errors.push(FieldError::new(
                "name",
                "Name must be less than 50 characters",
            ));
        }
        let description_len = self.description.trim().len();
        if description_len == 0 || description_len > MAX_DESCRIPTION_LENGTH {
            errors.push(FieldError::new(
                "description",
                "Description must be between 1 and 500 characters",
            ));
        }

        match Price::try_new(self.price) {
            Ok(price) if errors.is_empty() => Ok(price),
            Ok(_) => Err(errors),
            Err(_) => {
                errors.push(FieldError::new(
                    "price",
                    "Price per day must be a positive number",
                ));
                Err(errors)
            }
        }
    }
}

/// Spot aggregate - a rentable listing.
///
/// # Invariants
///
/// - `id` is globally unique
/// - all detail fields satisfy the validation rules in `SpotDetails`
/// - `rating` reflects the current review set for this spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    id: SpotId,
    owner_id: UserId,
    address: String,
    city: String,
    state: String,
    country: String,
    name: String,
    description: String,
    price: Price,
    rating: RatingSummary,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Spot {
    /// Create a new spot owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` carrying every violated field rule
    pub fn new(id: SpotId, owner_id: UserId, details: SpotDetails) -> Result<Self, DomainError> {
        let price = details
            .validate()
            .map_err(DomainError::validation_errors)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            owner_id,
            address: details.address,
            city: details.city,
            state: details.state,
            country: details.country,
            name: details.name,
            description: details.description,
            price,
            rating: RatingSummary::default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a spot from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SpotId,
        owner_id: UserId,
        address: String,
        city: String,
        state: String,
        country: String,
        name: String,
        description: String,
        price: Price,
        rating: RatingSummary,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            address,
            city,
            state,
            country,
            name,
            description,
            price,
            rating,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &SpotId {
        &self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Denormalized review summary.
    pub fn rating(&self) -> RatingSummary {
        self.rating
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Replace the listing details.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` carrying every violated field rule
    pub fn update_details(&mut self, details: SpotDetails) -> Result<(), DomainError> {
        let price = details
            .validate()
            .map_err(DomainError::validation_errors)?;

        self.address = details.address;
        self.city = details.city;
        self.state = details.state;
        self.country = details.country;
        self.name = details.name;
        self.description = details.description;
        self.price = price;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Store a freshly recomputed review summary.
    pub fn apply_rating(&mut self, rating: RatingSummary) {
        self.rating = rating;
    }
}

impl OwnedByUser for Spot {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}

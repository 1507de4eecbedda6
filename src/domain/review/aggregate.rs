//! Review aggregate entity.
//!
//! A review is a star rating plus free text, authored by one user for one
//! spot. A user may hold at most one review per spot; that invariant is
//! checked in the create handler and backed by a storage uniqueness
//! constraint.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, FieldError, OwnedByUser, ReviewId, SpotId, Stars, Timestamp, UserId,
};

/// Checks the review content rules, returning every violation at once.
///
/// Handlers run this before touching storage, so a bad payload never
/// reaches the locate step.
pub fn validate_review_content(body: &str, stars_raw: u8) -> Result<Stars, Vec<FieldError>> {
    let mut errors = Vec::new();

    if body.trim().is_empty() {
        errors.push(FieldError::new("review", "Review text is required"));
    }

    match Stars::try_from_u8(stars_raw) {
        Ok(stars) if errors.is_empty() => Ok(stars),
        Ok(_) => Err(errors),
        Err(_) => {
            errors.push(FieldError::new(
                "stars",
                "Stars must be an integer from 1 to 5",
            ));
            Err(errors)
        }
    }
}

/// Review aggregate - a rating and comment for one spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    spot_id: SpotId,
    user_id: UserId,
    body: String,
    stars: Stars,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Review {
    /// Create a new review.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` carrying every violated field rule
    pub fn new(
        id: ReviewId,
        spot_id: SpotId,
        user_id: UserId,
        body: String,
        stars_raw: u8,
    ) -> Result<Self, DomainError> {
        let stars = validate_review_content(&body, stars_raw).map_err(DomainError::validation_errors)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            spot_id,
            user_id,
            body,
            stars,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a review from persistence (no validation).
    pub fn reconstitute(
        id: ReviewId,
        spot_id: SpotId,
        user_id: UserId,
        body: String,
        stars: Stars,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            spot_id,
            user_id,
            body,
            stars,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &ReviewId {
        &self.id
    }

    pub fn spot_id(&self) -> &SpotId {
        &self.spot_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn stars(&self) -> Stars {
        self.stars
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Replace body and stars.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` carrying every violated field rule
    pub fn edit(&mut self, body: String, stars_raw: u8) -> Result<(), DomainError> {
        let stars = validate_review_content(&body, stars_raw).map_err(DomainError::validation_errors)?;

        self.body = body;
        self.stars = stars;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

impl OwnedByUser for Review {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

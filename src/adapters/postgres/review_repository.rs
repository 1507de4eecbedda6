//! PostgreSQL implementation of ReviewRepository.
//!
//! The `reviews` table carries `UNIQUE (user_id, spot_id)`; a violation
//! of that constraint surfaces here as `DuplicateReview` so concurrent
//! creates cannot slip past the handler's check.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, ReviewId, SpotId, Stars, Timestamp, UserId,
};
use crate::domain::review::Review;
use crate::ports::ReviewRepository;

use super::spot_repository::column_err;

/// Postgres error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of ReviewRepository.
#[derive(Clone)]
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn save(&self, review: &Review) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, spot_id, user_id, body, stars, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(review.id().as_uuid())
        .bind(review.spot_id().as_uuid())
        .bind(review.user_id().as_str())
        .bind(review.body())
        .bind(i16::from(review.stars().value()))
        .bind(review.created_at().as_datetime())
        .bind(review.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                DomainError::new(
                    ErrorCode::DuplicateReview,
                    "User already has a review for this spot",
                )
            }
            _ => DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert review: {}", e),
            ),
        })?;

        Ok(())
    }

    async fn update(&self, review: &Review) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE reviews SET body = $2, stars = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(review.id().as_uuid())
        .bind(review.body())
        .bind(i16::from(review.stars().value()))
        .bind(review.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update review: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ReviewNotFound,
                format!("Review not found: {}", review.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, spot_id, user_id, body, stars, created_at, updated_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch review: {}", e),
            )
        })?;

        row.map(row_to_review).transpose()
    }

    async fn find_by_spot(&self, spot_id: &SpotId) -> Result<Vec<Review>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, spot_id, user_id, body, stars, created_at, updated_at
            FROM reviews
            WHERE spot_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(spot_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch reviews for spot: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_review).collect()
    }

    async fn find_by_user_and_spot(
        &self,
        user_id: &UserId,
        spot_id: &SpotId,
    ) -> Result<Option<Review>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, spot_id, user_id, body, stars, created_at, updated_at
            FROM reviews
            WHERE user_id = $1 AND spot_id = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(spot_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch user review: {}", e),
            )
        })?;

        row.map(row_to_review).transpose()
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete review: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ReviewNotFound,
                format!("Review not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_review(row: sqlx::postgres::PgRow) -> Result<Review, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_err("id", e))?;
    let spot_id: uuid::Uuid = row
        .try_get("spot_id")
        .map_err(|e| column_err("spot_id", e))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| column_err("user_id", e))?;
    let body: String = row.try_get("body").map_err(|e| column_err("body", e))?;
    let stars: i16 = row.try_get("stars").map_err(|e| column_err("stars", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_err("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_err("updated_at", e))?;

    let user_id = UserId::new(user_id).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
    })?;
    let stars = Stars::try_from_u8(stars as u8).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid stars: {}", e))
    })?;

    Ok(Review::reconstitute(
        ReviewId::from_uuid(id),
        SpotId::from_uuid(spot_id),
        user_id,
        body,
        stars,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

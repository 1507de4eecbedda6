//! PostgreSQL implementations of the image repositories.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, ReviewId, ReviewImageId, SpotId, SpotImageId, Timestamp,
};
use crate::domain::review::ReviewImage;
use crate::domain::spot::SpotImage;
use crate::ports::{ReviewImageRepository, SpotImageRepository};

use super::spot_repository::column_err;

/// PostgreSQL implementation of SpotImageRepository.
#[derive(Clone)]
pub struct PostgresSpotImageRepository {
    pool: PgPool,
}

impl PostgresSpotImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpotImageRepository for PostgresSpotImageRepository {
    async fn save(&self, image: &SpotImage) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO spot_images (id, spot_id, url, preview, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(image.id().as_uuid())
        .bind(image.spot_id().as_uuid())
        .bind(image.url())
        .bind(image.is_preview())
        .bind(image.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert spot image: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id_and_spot(
        &self,
        id: &SpotImageId,
        spot_id: &SpotId,
    ) -> Result<Option<SpotImage>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, spot_id, url, preview, created_at
            FROM spot_images
            WHERE id = $1 AND spot_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(spot_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch spot image: {}", e),
            )
        })?;

        row.map(row_to_spot_image).transpose()
    }

    async fn find_by_spot(&self, spot_id: &SpotId) -> Result<Vec<SpotImage>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, spot_id, url, preview, created_at
            FROM spot_images
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
                format!("Failed to fetch spot images: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_spot_image).collect()
    }

    async fn delete(&self, id: &SpotImageId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM spot_images WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete spot image: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SpotImageNotFound,
                format!("Spot image not found: {}", id),
            ));
        }

        Ok(())
    }
}

/// PostgreSQL implementation of ReviewImageRepository.
#[derive(Clone)]
pub struct PostgresReviewImageRepository {
    pool: PgPool,
}

impl PostgresReviewImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewImageRepository for PostgresReviewImageRepository {
    async fn save(&self, image: &ReviewImage) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO review_images (id, review_id, url, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(image.id().as_uuid())
        .bind(image.review_id().as_uuid())
        .bind(image.url())
        .bind(image.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert review image: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id_and_review(
        &self,
        id: &ReviewImageId,
        review_id: &ReviewId,
    ) -> Result<Option<ReviewImage>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, review_id, url, created_at
            FROM review_images
            WHERE id = $1 AND review_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(review_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch review image: {}", e),
            )
        })?;

        row.map(row_to_review_image).transpose()
    }

    async fn find_by_review(&self, review_id: &ReviewId) -> Result<Vec<ReviewImage>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, review_id, url, created_at
            FROM review_images
            WHERE review_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(review_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch review images: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_review_image).collect()
    }

    async fn count_by_review(&self, review_id: &ReviewId) -> Result<usize, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM review_images WHERE review_id = $1")
                .bind(review_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to count review images: {}", e),
                    )
                })?;

        Ok(result.0 as usize)
    }

    async fn delete(&self, id: &ReviewImageId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM review_images WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete review image: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ReviewImageNotFound,
                format!("Review image not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_spot_image(row: sqlx::postgres::PgRow) -> Result<SpotImage, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_err("id", e))?;
    let spot_id: uuid::Uuid = row
        .try_get("spot_id")
        .map_err(|e| column_err("spot_id", e))?;
    let url: String = row.try_get("url").map_err(|e| column_err("url", e))?;
    let preview: bool = row
        .try_get("preview")
        .map_err(|e| column_err("preview", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_err("created_at", e))?;

    Ok(SpotImage::reconstitute(
        SpotImageId::from_uuid(id),
        SpotId::from_uuid(spot_id),
        url,
        preview,
        Timestamp::from_datetime(created_at),
    ))
}

fn row_to_review_image(row: sqlx::postgres::PgRow) -> Result<ReviewImage, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_err("id", e))?;
    let review_id: uuid::Uuid = row
        .try_get("review_id")
        .map_err(|e| column_err("review_id", e))?;
    let url: String = row.try_get("url").map_err(|e| column_err("url", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_err("created_at", e))?;

    Ok(ReviewImage::reconstitute(
        ReviewImageId::from_uuid(id),
        ReviewId::from_uuid(review_id),
        url,
        Timestamp::from_datetime(created_at),
    ))
}

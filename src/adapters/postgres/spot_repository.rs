//! PostgreSQL implementation of SpotRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, OwnedByUser, Price, SpotId, Timestamp, UserId,
};
use crate::domain::spot::{RatingSummary, Spot};
use crate::ports::SpotRepository;

/// PostgreSQL implementation of SpotRepository.
#[derive(Clone)]
pub struct PostgresSpotRepository {
    pool: PgPool,
}

impl PostgresSpotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpotRepository for PostgresSpotRepository {
    async fn save(&self, spot: &Spot) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO spots (
                id, owner_id, address, city, state, country, name, description,
                price, num_reviews, avg_rating, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(spot.id().as_uuid())
        .bind(spot.owner_id().as_str())
        .bind(spot.address())
        .bind(spot.city())
        .bind(spot.state())
        .bind(spot.country())
        .bind(spot.name())
        .bind(spot.description())
        .bind(spot.price().value())
        .bind(spot.rating().count() as i32)
        .bind(spot.rating().average())
        .bind(spot.created_at().as_datetime())
        .bind(spot.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert spot: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, spot: &Spot) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE spots SET
                address = $2,
                city = $3,
                state = $4,
                country = $5,
                name = $6,
                description = $7,
                price = $8,
                num_reviews = $9,
                avg_rating = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(spot.id().as_uuid())
        .bind(spot.address())
        .bind(spot.city())
        .bind(spot.state())
        .bind(spot.country())
        .bind(spot.name())
        .bind(spot.description())
        .bind(spot.price().value())
        .bind(spot.rating().count() as i32)
        .bind(spot.rating().average())
        .bind(spot.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update spot: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SpotNotFound,
                format!("Spot not found: {}", spot.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SpotId) -> Result<Option<Spot>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, address, city, state, country, name, description,
                   price, num_reviews, avg_rating, created_at, updated_at
            FROM spots
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch spot: {}", e),
            )
        })?;

        row.map(row_to_spot).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Spot>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, address, city, state, country, name, description,
                   price, num_reviews, avg_rating, created_at, updated_at
            FROM spots
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list spots: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_spot).collect()
    }

    async fn delete(&self, id: &SpotId) -> Result<(), DomainError> {
        // Reviews and images cascade via foreign keys.
        let result = sqlx::query("DELETE FROM spots WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete spot: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SpotNotFound,
                format!("Spot not found: {}", id),
            ));
        }

        Ok(())
    }
}

pub(super) fn column_err(name: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read column '{}': {}", name, e),
    )
}

fn row_to_spot(row: sqlx::postgres::PgRow) -> Result<Spot, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_err("id", e))?;
    let owner_id: String = row
        .try_get("owner_id")
        .map_err(|e| column_err("owner_id", e))?;
    let address: String = row
        .try_get("address")
        .map_err(|e| column_err("address", e))?;
    let city: String = row.try_get("city").map_err(|e| column_err("city", e))?;
    let state: String = row.try_get("state").map_err(|e| column_err("state", e))?;
    let country: String = row
        .try_get("country")
        .map_err(|e| column_err("country", e))?;
    let name: String = row.try_get("name").map_err(|e| column_err("name", e))?;
    let description: String = row
        .try_get("description")
        .map_err(|e| column_err("description", e))?;
    let price: f64 = row.try_get("price").map_err(|e| column_err("price", e))?;
    let num_reviews: i32 = row
        .try_get("num_reviews")
        .map_err(|e| column_err("num_reviews", e))?;
    let avg_rating: Option<f64> = row
        .try_get("avg_rating")
        .map_err(|e| column_err("avg_rating", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_err("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_err("updated_at", e))?;

    let owner_id = UserId::new(owner_id).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid owner_id: {}", e))
    })?;
    let price = Price::try_new(price).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid price: {}", e))
    })?;

    Ok(Spot::reconstitute(
        SpotId::from_uuid(id),
        owner_id,
        address,
        city,
        state,
        country,
        name,
        description,
        price,
        RatingSummary::from_parts(num_reviews as u32, avg_rating),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

//! PostgreSQL adapters for the repository ports.

mod image_repository;
mod review_repository;
mod spot_repository;

pub use image_repository::{PostgresReviewImageRepository, PostgresSpotImageRepository};
pub use review_repository::PostgresReviewRepository;
pub use spot_repository::PostgresSpotRepository;

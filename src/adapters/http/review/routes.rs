//! HTTP routes for review endpoints.

use axum::{
    routing::{delete, post, put},
    Router,
};

use super::handlers::{
    add_review_image, delete_review, delete_review_image, update_review, ReviewHandlers,
};

/// Creates the review router with all endpoints.
pub fn review_routes(handlers: ReviewHandlers) -> Router {
    Router::new()
        .route("/:review_id", put(update_review))
        .route("/:review_id", delete(delete_review))
        .route("/:review_id/images", post(add_review_image))
        .route("/:review_id/images/:image_id", delete(delete_review_image))
        .with_state(handlers)
}

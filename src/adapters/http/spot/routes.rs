//! HTTP routes for spot endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_spot_image, create_review, create_spot, delete_spot, delete_spot_image, get_spot,
    list_spot_reviews, list_spots, update_spot, SpotHandlers,
};

/// Creates the spot router with all endpoints, including the review
/// endpoints scoped under a spot.
pub fn spot_routes(handlers: SpotHandlers) -> Router {
    Router::new()
        .route("/", get(list_spots))
        .route("/", post(create_spot))
        .route("/:spot_id", get(get_spot))
        .route("/:spot_id", put(update_spot))
        .route("/:spot_id", delete(delete_spot))
        .route("/:spot_id/reviews", get(list_spot_reviews))
        .route("/:spot_id/reviews", post(create_review))
        .route("/:spot_id/images", post(add_spot_image))
        .route("/:spot_id/images/:image_id", delete(delete_spot_image))
        .with_state(handlers)
}

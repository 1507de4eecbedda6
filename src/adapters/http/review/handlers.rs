//! HTTP handlers for review endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::review::{
    AddReviewImageCommand, AddReviewImageHandler, DeleteReviewCommand, DeleteReviewHandler,
    DeleteReviewImageCommand, DeleteReviewImageHandler, UpdateReviewCommand, UpdateReviewHandler,
};
use crate::domain::foundation::{ReviewId, ReviewImageId};
use crate::domain::review::ReviewError;

use super::dto::{
    AddReviewImageRequest, MessageResponse, ReviewContentRequest, ReviewImageResponse,
    ReviewResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReviewHandlers {
    update_handler: Arc<UpdateReviewHandler>,
    delete_handler: Arc<DeleteReviewHandler>,
    add_image_handler: Arc<AddReviewImageHandler>,
    delete_image_handler: Arc<DeleteReviewImageHandler>,
}

impl ReviewHandlers {
    pub fn new(
        update_handler: Arc<UpdateReviewHandler>,
        delete_handler: Arc<DeleteReviewHandler>,
        add_image_handler: Arc<AddReviewImageHandler>,
        delete_image_handler: Arc<DeleteReviewImageHandler>,
    ) -> Self {
        Self {
            update_handler,
            delete_handler,
            add_image_handler,
            delete_image_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// PUT /api/reviews/:reviewId - Edit a review
pub async fn update_review(
    State(handlers): State<ReviewHandlers>,
    RequireAuth(user): RequireAuth,
    Path(review_id): Path<String>,
    Json(req): Json<ReviewContentRequest>,
) -> Response {
    let review_id = match review_id.parse::<ReviewId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("review"),
    };

    let cmd = UpdateReviewCommand {
        review_id,
        user_id: user.id,
        body: req.review.clone(),
        stars: req.stars_raw(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(review) => (StatusCode::OK, Json(ReviewResponse::from(&review))).into_response(),
        Err(e) => handle_review_error(e),
    }
}

/// DELETE /api/reviews/:reviewId - Delete a review
pub async fn delete_review(
    State(handlers): State<ReviewHandlers>,
    RequireAuth(user): RequireAuth,
    Path(review_id): Path<String>,
) -> Response {
    let review_id = match review_id.parse::<ReviewId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("review"),
    };

    let cmd = DeleteReviewCommand {
        review_id,
        user_id: user.id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::deleted())).into_response(),
        Err(e) => handle_review_error(e),
    }
}

/// POST /api/reviews/:reviewId/images - Attach an image to a review
pub async fn add_review_image(
    State(handlers): State<ReviewHandlers>,
    RequireAuth(user): RequireAuth,
    Path(review_id): Path<String>,
    Json(req): Json<AddReviewImageRequest>,
) -> Response {
    let review_id = match review_id.parse::<ReviewId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("review"),
    };

    let cmd = AddReviewImageCommand {
        review_id,
        user_id: user.id,
        url: req.url,
    };

    match handlers.add_image_handler.handle(cmd).await {
        Ok(image) => (
            StatusCode::CREATED,
            Json(ReviewImageResponse::from(&image)),
        )
            .into_response(),
        Err(e) => handle_review_error(e),
    }
}

/// DELETE /api/reviews/:reviewId/images/:imageId - Remove a review image
pub async fn delete_review_image(
    State(handlers): State<ReviewHandlers>,
    RequireAuth(user): RequireAuth,
    Path((review_id, image_id)): Path<(String, String)>,
) -> Response {
    let review_id = match review_id.parse::<ReviewId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("review"),
    };
    let image_id = match image_id.parse::<ReviewImageId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("image"),
    };

    let cmd = DeleteReviewImageCommand {
        review_id,
        image_id,
        user_id: user.id,
    };

    match handlers.delete_image_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::deleted())).into_response(),
        Err(e) => handle_review_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn invalid_id_response(what: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::message(format!("Invalid {} ID", what))),
    )
        .into_response()
}

/// Single dispatch point for review terminal outcomes.
pub(crate) fn handle_review_error(error: ReviewError) -> Response {
    match error {
        ReviewError::NotFound(_) | ReviewError::SpotNotFound(_) | ReviewError::ImageNotFound(_) => {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::message(error.message())),
            )
                .into_response()
        }
        ReviewError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::message("Forbidden")),
        )
            .into_response(),
        ReviewError::AlreadyReviewed | ReviewError::ImageLimitReached => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::message(error.message())),
        )
            .into_response(),
        ReviewError::ValidationFailed { errors } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(errors)),
        )
            .into_response(),
        ReviewError::Infrastructure(msg) => {
            tracing::error!("Review operation failed: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SpotId;
    use std::collections::HashMap;

    #[test]
    fn review_not_found_maps_to_404() {
        let response = handle_review_error(ReviewError::not_found(ReviewId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn spot_not_found_maps_to_404() {
        let response = handle_review_error(ReviewError::spot_not_found(SpotId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response = handle_review_error(ReviewError::Forbidden);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn duplicate_review_maps_to_409() {
        let response = handle_review_error(ReviewError::AlreadyReviewed);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn image_cap_maps_to_409() {
        let response = handle_review_error(ReviewError::ImageLimitReached);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = handle_review_error(ReviewError::ValidationFailed {
            errors: HashMap::new(),
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_review_error(ReviewError::infrastructure("db down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! HTTP handlers for spot endpoints, including the review endpoints that
//! live under a spot (list and create).

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::review::dto::{
    MessageResponse, ReviewContentRequest, ReviewListResponse, ReviewResponse,
    ReviewWithImagesResponse,
};
use crate::adapters::http::review::handlers::handle_review_error;
use crate::application::handlers::review::{
    CreateReviewCommand, CreateReviewHandler, ListSpotReviewsHandler, ListSpotReviewsQuery,
};
use crate::application::handlers::spot::{
    AddSpotImageCommand, AddSpotImageHandler, CreateSpotCommand, CreateSpotHandler,
    DeleteSpotCommand, DeleteSpotHandler, DeleteSpotImageCommand, DeleteSpotImageHandler,
    GetSpotHandler, GetSpotQuery, ListSpotsHandler, ListSpotsQuery, UpdateSpotCommand,
    UpdateSpotHandler,
};
use crate::domain::foundation::{SpotId, SpotImageId};
use crate::domain::spot::SpotError;
use crate::ports::FileUpload;

use super::dto::{
    ListSpotsQueryParams, SpotDetailsRequest, SpotImageResponse, SpotListResponse,
    SpotRecordResponse, SpotResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SpotHandlers {
    create_handler: Arc<CreateSpotHandler>,
    update_handler: Arc<UpdateSpotHandler>,
    delete_handler: Arc<DeleteSpotHandler>,
    get_handler: Arc<GetSpotHandler>,
    list_handler: Arc<ListSpotsHandler>,
    add_image_handler: Arc<AddSpotImageHandler>,
    delete_image_handler: Arc<DeleteSpotImageHandler>,
    create_review_handler: Arc<CreateReviewHandler>,
    list_reviews_handler: Arc<ListSpotReviewsHandler>,
}

impl SpotHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_handler: Arc<CreateSpotHandler>,
        update_handler: Arc<UpdateSpotHandler>,
        delete_handler: Arc<DeleteSpotHandler>,
        get_handler: Arc<GetSpotHandler>,
        list_handler: Arc<ListSpotsHandler>,
        add_image_handler: Arc<AddSpotImageHandler>,
        delete_image_handler: Arc<DeleteSpotImageHandler>,
        create_review_handler: Arc<CreateReviewHandler>,
        list_reviews_handler: Arc<ListSpotReviewsHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            get_handler,
            list_handler,
            add_image_handler,
            delete_image_handler,
            create_review_handler,
            list_reviews_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/spots - Paginated, price-filtered spot index (public)
pub async fn list_spots(
    State(handlers): State<SpotHandlers>,
    Query(params): Query<ListSpotsQueryParams>,
) -> Response {
    if let Err(errors) = params.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(errors)),
        )
            .into_response();
    }

    let query = ListSpotsQuery {
        page: params.page.map(|p| u32::try_from(p).unwrap_or(u32::MAX)),
        size: params.size.map(|s| u32::try_from(s).unwrap_or(u32::MAX)),
        min_price: params.min_price,
        max_price: params.max_price,
    };

    match handlers.list_handler.handle(query).await {
        Ok(list) => {
            let response = SpotListResponse {
                spots: list.items.into_iter().map(Into::into).collect(),
                page: list.page,
                size: list.size,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_spot_error(e),
    }
}

/// GET /api/spots/:spotId - Spot detail with images and aggregates (public)
pub async fn get_spot(
    State(handlers): State<SpotHandlers>,
    Path(spot_id): Path<String>,
) -> Response {
    let spot_id = match spot_id.parse::<SpotId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("spot"),
    };

    match handlers.get_handler.handle(GetSpotQuery { spot_id }).await {
        Ok(view) => (StatusCode::OK, Json(SpotResponse::from(view))).into_response(),
        Err(e) => handle_spot_error(e),
    }
}

/// POST /api/spots - Create a spot
pub async fn create_spot(
    State(handlers): State<SpotHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SpotDetailsRequest>,
) -> Response {
    let cmd = CreateSpotCommand {
        user_id: user.id,
        details: req.into(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(spot) => (
            StatusCode::CREATED,
            Json(SpotRecordResponse::from(&spot)),
        )
            .into_response(),
        Err(e) => handle_spot_error(e),
    }
}

/// PUT /api/spots/:spotId - Edit a spot
pub async fn update_spot(
    State(handlers): State<SpotHandlers>,
    RequireAuth(user): RequireAuth,
    Path(spot_id): Path<String>,
    Json(req): Json<SpotDetailsRequest>,
) -> Response {
    let spot_id = match spot_id.parse::<SpotId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("spot"),
    };

    let cmd = UpdateSpotCommand {
        spot_id,
        user_id: user.id,
        details: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(spot) => (StatusCode::OK, Json(SpotRecordResponse::from(&spot))).into_response(),
        Err(e) => handle_spot_error(e),
    }
}

/// DELETE /api/spots/:spotId - Delete a spot
pub async fn delete_spot(
    State(handlers): State<SpotHandlers>,
    RequireAuth(user): RequireAuth,
    Path(spot_id): Path<String>,
) -> Response {
    let spot_id = match spot_id.parse::<SpotId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("spot"),
    };

    let cmd = DeleteSpotCommand {
        spot_id,
        user_id: user.id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::deleted())).into_response(),
        Err(e) => handle_spot_error(e),
    }
}

/// GET /api/spots/:spotId/reviews - A spot's reviews (public)
pub async fn list_spot_reviews(
    State(handlers): State<SpotHandlers>,
    Path(spot_id): Path<String>,
) -> Response {
    let spot_id = match spot_id.parse::<SpotId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("spot"),
    };

    match handlers
        .list_reviews_handler
        .handle(ListSpotReviewsQuery { spot_id })
        .await
    {
        Ok(views) => {
            let response = ReviewListResponse {
                reviews: views
                    .into_iter()
                    .map(ReviewWithImagesResponse::from)
                    .collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_review_error(e),
    }
}

/// POST /api/spots/:spotId/reviews - Review a spot
pub async fn create_review(
    State(handlers): State<SpotHandlers>,
    RequireAuth(user): RequireAuth,
    Path(spot_id): Path<String>,
    Json(req): Json<ReviewContentRequest>,
) -> Response {
    let spot_id = match spot_id.parse::<SpotId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("spot"),
    };

    let cmd = CreateReviewCommand {
        spot_id,
        user_id: user.id,
        body: req.review.clone(),
        stars: req.stars_raw(),
    };

    match handlers.create_review_handler.handle(cmd).await {
        Ok(review) => {
            (StatusCode::CREATED, Json(ReviewResponse::from(&review))).into_response()
        }
        Err(e) => handle_review_error(e),
    }
}

/// POST /api/spots/:spotId/images - Upload an image for a spot
///
/// Multipart form: an `image` file field, plus an optional `preview`
/// boolean field.
pub async fn add_spot_image(
    State(handlers): State<SpotHandlers>,
    RequireAuth(user): RequireAuth,
    Path(spot_id): Path<String>,
    mut multipart: Multipart,
) -> Response {
    let spot_id = match spot_id.parse::<SpotId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("spot"),
    };

    let mut file: Option<FileUpload> = None;
    let mut preview = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::message("Malformed multipart body")),
                )
                    .into_response()
            }
        };

        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("image") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                match field.bytes().await {
                    Ok(bytes) => {
                        file = Some(FileUpload::new(bytes.to_vec(), file_name, content_type));
                    }
                    Err(_) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::message("Malformed multipart body")),
                        )
                            .into_response()
                    }
                }
            }
            Some("preview") => {
                preview = matches!(field.text().await.as_deref(), Ok("true") | Ok("1"));
            }
            _ => {}
        }
    }

    let Some(file) = file else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message("No file uploaded")),
        )
            .into_response();
    };

    let cmd = AddSpotImageCommand {
        spot_id,
        user_id: user.id,
        file,
        preview,
    };

    match handlers.add_image_handler.handle(cmd).await {
        Ok(image) => (StatusCode::CREATED, Json(SpotImageResponse::from(&image))).into_response(),
        Err(e) => handle_spot_error(e),
    }
}

/// DELETE /api/spots/:spotId/images/:imageId - Remove a spot image
pub async fn delete_spot_image(
    State(handlers): State<SpotHandlers>,
    RequireAuth(user): RequireAuth,
    Path((spot_id, image_id)): Path<(String, String)>,
) -> Response {
    let spot_id = match spot_id.parse::<SpotId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("spot"),
    };
    let image_id = match image_id.parse::<SpotImageId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("image"),
    };

    let cmd = DeleteSpotImageCommand {
        spot_id,
        image_id,
        user_id: user.id,
    };

    match handlers.delete_image_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::deleted())).into_response(),
        Err(e) => handle_spot_error(e),
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

/// Single dispatch point for spot terminal outcomes.
fn handle_spot_error(error: SpotError) -> Response {
    match error {
        SpotError::NotFound(_) | SpotError::ImageNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::message(error.message())),
        )
            .into_response(),
        SpotError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::message("Forbidden")),
        )
            .into_response(),
        SpotError::ValidationFailed { errors } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(errors)),
        )
            .into_response(),
        SpotError::Storage(msg) => {
            tracing::error!("Spot image upload failed: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
        SpotError::Infrastructure(msg) => {
            tracing::error!("Spot operation failed: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}

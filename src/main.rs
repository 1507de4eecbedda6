//! Spotshare server entry point.
//!
//! Loads configuration, wires the adapters to the application handlers,
//! and serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use spotshare::adapters::auth::StaticSessionValidator;
use spotshare::adapters::blob::LocalFileStorage;
use spotshare::adapters::http::middleware::{auth_middleware, AuthState};
use spotshare::adapters::http::{review_routes, spot_routes, ReviewHandlers, SpotHandlers};
use spotshare::adapters::postgres::{
    PostgresReviewImageRepository, PostgresReviewRepository, PostgresSpotImageRepository,
    PostgresSpotRepository,
};
use spotshare::application::handlers::review::{
    AddReviewImageHandler, CreateReviewHandler, DeleteReviewHandler, DeleteReviewImageHandler,
    ListSpotReviewsHandler, SpotRatingRefresher, UpdateReviewHandler,
};
use spotshare::application::handlers::spot::{
    AddSpotImageHandler, CreateSpotHandler, DeleteSpotHandler, DeleteSpotImageHandler,
    GetSpotHandler, ListSpotsHandler, UpdateSpotHandler,
};
use spotshare::config::AppConfig;
use spotshare::domain::foundation::{AuthenticatedUser, UserId};
use spotshare::ports::{
    BlobStorage, ReviewImageRepository, ReviewRepository, SpotImageRepository, SpotRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Repositories
    let spots: Arc<dyn SpotRepository> = Arc::new(PostgresSpotRepository::new(pool.clone()));
    let reviews: Arc<dyn ReviewRepository> = Arc::new(PostgresReviewRepository::new(pool.clone()));
    let spot_images: Arc<dyn SpotImageRepository> =
        Arc::new(PostgresSpotImageRepository::new(pool.clone()));
    let review_images: Arc<dyn ReviewImageRepository> =
        Arc::new(PostgresReviewImageRepository::new(pool));

    // Blob storage for image uploads
    let blobs: Arc<dyn BlobStorage> = Arc::new(LocalFileStorage::new(
        &config.storage.upload_dir,
        &config.storage.public_base_url,
    ));

    // Session validation
    let validator = StaticSessionValidator::new();
    if let Some((token, user_id)) = config.auth.dev_credentials() {
        validator.add_token(
            token,
            AuthenticatedUser::new(
                UserId::new(user_id)?,
                format!("{}@example.com", user_id),
                None,
            ),
        );
        tracing::info!("Registered development auth token for {}", user_id);
    }
    let auth_state: AuthState = Arc::new(validator);

    // Application handlers
    let refresher = Arc::new(SpotRatingRefresher::new(spots.clone(), reviews.clone()));

    let spot_handlers = SpotHandlers::new(
        Arc::new(CreateSpotHandler::new(spots.clone())),
        Arc::new(UpdateSpotHandler::new(spots.clone())),
        Arc::new(DeleteSpotHandler::new(spots.clone())),
        Arc::new(GetSpotHandler::new(
            spots.clone(),
            reviews.clone(),
            spot_images.clone(),
        )),
        Arc::new(ListSpotsHandler::new(spots.clone(), spot_images.clone())),
        Arc::new(AddSpotImageHandler::new(
            spots.clone(),
            spot_images.clone(),
            blobs,
        )),
        Arc::new(DeleteSpotImageHandler::new(spots.clone(), spot_images)),
        Arc::new(CreateReviewHandler::new(
            spots.clone(),
            reviews.clone(),
            refresher.clone(),
        )),
        Arc::new(ListSpotReviewsHandler::new(
            spots,
            reviews.clone(),
            review_images.clone(),
        )),
    );

    let review_handlers = ReviewHandlers::new(
        Arc::new(UpdateReviewHandler::new(reviews.clone(), refresher.clone())),
        Arc::new(DeleteReviewHandler::new(reviews.clone(), refresher)),
        Arc::new(AddReviewImageHandler::new(
            reviews.clone(),
            review_images.clone(),
        )),
        Arc::new(DeleteReviewImageHandler::new(reviews, review_images)),
    );

    let cors = cors_layer(&config);
    let app = Router::new()
        .nest("/api/spots", spot_routes(spot_handlers))
        .nest("/api/reviews", review_routes(review_handlers))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

//! Integration tests for the review lifecycle and spot aggregation.
//!
//! Wires the application handlers over the in-memory adapters and drives
//! whole workflows: create spot → review it → edit → delete, asserting the
//! denormalized summary tracks the review set at every step.

use std::sync::Arc;

use spotshare::adapters::storage::{
    InMemoryReviewImageRepository, InMemoryReviewRepository, InMemorySpotImageRepository,
    InMemorySpotRepository, InMemoryStore,
};
use spotshare::application::handlers::review::{
    AddReviewImageCommand, AddReviewImageHandler, CreateReviewCommand, CreateReviewHandler,
    DeleteReviewCommand, DeleteReviewHandler, SpotRatingRefresher, UpdateReviewCommand,
    UpdateReviewHandler,
};
use spotshare::application::handlers::spot::{
    CreateSpotCommand, CreateSpotHandler, DeleteSpotCommand, DeleteSpotHandler, GetSpotHandler,
    GetSpotQuery, ListSpotsHandler, ListSpotsQuery, UpdateSpotCommand, UpdateSpotHandler,
};
use spotshare::domain::foundation::{SpotId, UserId};
use spotshare::domain::review::{Review, ReviewError, MAX_IMAGES_PER_REVIEW};
use spotshare::domain::spot::{SpotDetails, SpotError};
use spotshare::ports::{ReviewRepository, SpotRepository};

// =============================================================================
// Test infrastructure
// =============================================================================

struct App {
    spots: Arc<InMemorySpotRepository>,
    reviews: Arc<InMemoryReviewRepository>,
    create_spot: CreateSpotHandler,
    update_spot: UpdateSpotHandler,
    delete_spot: DeleteSpotHandler,
    get_spot: GetSpotHandler,
    list_spots: ListSpotsHandler,
    create_review: CreateReviewHandler,
    update_review: UpdateReviewHandler,
    delete_review: DeleteReviewHandler,
    add_review_image: AddReviewImageHandler,
}

fn app() -> App {
    let store = InMemoryStore::new();
    let spots = Arc::new(InMemorySpotRepository::new(store.clone()));
    let reviews = Arc::new(InMemoryReviewRepository::new(store.clone()));
    let spot_images = Arc::new(InMemorySpotImageRepository::new(store.clone()));
    let review_images = Arc::new(InMemoryReviewImageRepository::new(store));
    let refresher = Arc::new(SpotRatingRefresher::new(spots.clone(), reviews.clone()));

    App {
        spots: spots.clone(),
        reviews: reviews.clone(),
        create_spot: CreateSpotHandler::new(spots.clone()),
        update_spot: UpdateSpotHandler::new(spots.clone()),
        delete_spot: DeleteSpotHandler::new(spots.clone()),
        get_spot: GetSpotHandler::new(spots.clone(), reviews.clone(), spot_images.clone()),
        list_spots: ListSpotsHandler::new(spots.clone(), spot_images),
        create_review: CreateReviewHandler::new(spots, reviews.clone(), refresher.clone()),
        update_review: UpdateReviewHandler::new(reviews.clone(), refresher.clone()),
        delete_review: DeleteReviewHandler::new(reviews.clone(), refresher),
        add_review_image: AddReviewImageHandler::new(reviews, review_images),
    }
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn details(name: &str, price: f64) -> SpotDetails {
    SpotDetails {
        address: "100 Test Ave".to_string(),
        city: "Testville".to_string(),
        state: "TS".to_string(),
        country: "USA".to_string(),
        name: name.to_string(),
        description: "A fine place".to_string(),
        price,
    }
}

async fn create_spot(app: &App, owner: &str, name: &str, price: f64) -> SpotId {
    let spot = app
        .create_spot
        .handle(CreateSpotCommand {
            user_id: user(owner),
            details: details(name, price),
        })
        .await
        .unwrap();
    *spot.id()
}

async fn add_review(app: &App, spot_id: SpotId, author: &str, stars: u8) {
    app.create_review
        .handle(CreateReviewCommand {
            spot_id,
            user_id: user(author),
            body: format!("{} stars from {}", stars, author),
            stars,
        })
        .await
        .unwrap();
}

async fn review_by(app: &App, spot_id: SpotId, author: &str) -> Review {
    app.reviews
        .find_by_user_and_spot(&user(author), &spot_id)
        .await
        .unwrap()
        .expect("review should exist")
}

// =============================================================================
// Aggregation through the review lifecycle
// =============================================================================

#[tokio::test]
async fn aggregates_track_creates_edits_and_deletes() {
    let app = app();
    let spot_id = create_spot(&app, "host-1", "Tracked Spot", 100.0).await;

    // No reviews yet: unrated, not zero.
    let view = app.get_spot.handle(GetSpotQuery { spot_id }).await.unwrap();
    assert_eq!(view.rating.count(), 0);
    assert_eq!(view.rating.display_average(), "New");

    // [5, 4, 3] -> 4.0
    add_review(&app, spot_id, "guest-1", 5).await;
    add_review(&app, spot_id, "guest-2", 4).await;
    add_review(&app, spot_id, "guest-3", 3).await;

    let spot = app.spots.find_by_id(&spot_id).await.unwrap().unwrap();
    assert_eq!(spot.rating().count(), 3);
    assert_eq!(spot.rating().average(), Some(4.0));

    // Edit guest-3's review from 3 to 1: [5, 4, 1] -> 3.3
    let guest3 = review_by(&app, spot_id, "guest-3").await;
    app.update_review
        .handle(UpdateReviewCommand {
            review_id: *guest3.id(),
            user_id: user("guest-3"),
            body: "Changed my mind".to_string(),
            stars: 1,
        })
        .await
        .unwrap();

    let spot = app.spots.find_by_id(&spot_id).await.unwrap().unwrap();
    assert_eq!(spot.rating().average(), Some(3.3));

    // Delete guest-1's review: [4, 1] -> 2.5
    let guest1 = review_by(&app, spot_id, "guest-1").await;
    app.delete_review
        .handle(DeleteReviewCommand {
            review_id: *guest1.id(),
            user_id: user("guest-1"),
        })
        .await
        .unwrap();

    let spot = app.spots.find_by_id(&spot_id).await.unwrap().unwrap();
    assert_eq!(spot.rating().count(), 2);
    assert_eq!(spot.rating().average(), Some(2.5));
}

#[tokio::test]
async fn deleting_the_last_review_returns_spot_to_unrated() {
    let app = app();
    let spot_id = create_spot(&app, "host-1", "Resettable Spot", 90.0).await;

    add_review(&app, spot_id, "guest-1", 2).await;
    let review = review_by(&app, spot_id, "guest-1").await;

    app.delete_review
        .handle(DeleteReviewCommand {
            review_id: *review.id(),
            user_id: user("guest-1"),
        })
        .await
        .unwrap();

    let view = app.get_spot.handle(GetSpotQuery { spot_id }).await.unwrap();
    assert_eq!(view.rating.count(), 0);
    assert_eq!(view.rating.display_average(), "New");

    let spot = app.spots.find_by_id(&spot_id).await.unwrap().unwrap();
    assert_eq!(spot.rating().average(), None);
}

#[tokio::test]
async fn detail_view_and_denormalized_columns_agree() {
    let app = app();
    let spot_id = create_spot(&app, "host-1", "Consistent Spot", 110.0).await;

    add_review(&app, spot_id, "guest-1", 4).await;
    add_review(&app, spot_id, "guest-2", 5).await;

    let view = app.get_spot.handle(GetSpotQuery { spot_id }).await.unwrap();
    let spot = app.spots.find_by_id(&spot_id).await.unwrap().unwrap();

    assert_eq!(view.rating, spot.rating());
}

// =============================================================================
// Uniqueness and limits
// =============================================================================

#[tokio::test]
async fn duplicate_review_is_rejected_and_nothing_persists() {
    let app = app();
    let spot_id = create_spot(&app, "host-1", "Popular Spot", 100.0).await;

    add_review(&app, spot_id, "guest-1", 5).await;

    let result = app
        .create_review
        .handle(CreateReviewCommand {
            spot_id,
            user_id: user("guest-1"),
            body: "Trying again".to_string(),
            stars: 1,
        })
        .await;

    assert!(matches!(result, Err(ReviewError::AlreadyReviewed)));
    assert_eq!(app.reviews.find_by_spot(&spot_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn review_image_cap_is_enforced() {
    let app = app();
    let spot_id = create_spot(&app, "host-1", "Photogenic Spot", 100.0).await;
    add_review(&app, spot_id, "guest-1", 5).await;
    let review = review_by(&app, spot_id, "guest-1").await;

    for n in 0..MAX_IMAGES_PER_REVIEW {
        app.add_review_image
            .handle(AddReviewImageCommand {
                review_id: *review.id(),
                user_id: user("guest-1"),
                url: format!("https://cdn.example.com/{}.jpg", n),
            })
            .await
            .unwrap();
    }

    let result = app
        .add_review_image
        .handle(AddReviewImageCommand {
            review_id: *review.id(),
            user_id: user("guest-1"),
            url: "https://cdn.example.com/one-too-many.jpg".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ReviewError::ImageLimitReached)));
}

// =============================================================================
// Ownership boundaries across the workflow
// =============================================================================

#[tokio::test]
async fn foreign_principal_cannot_mutate_a_spot() {
    let app = app();
    let spot_id = create_spot(&app, "host-1", "Guarded Spot", 100.0).await;

    let update = app
        .update_spot
        .handle(UpdateSpotCommand {
            spot_id,
            user_id: user("intruder"),
            details: details("Taken Over", 1.0),
        })
        .await;
    assert!(matches!(update, Err(SpotError::Forbidden)));

    let delete = app
        .delete_spot
        .handle(DeleteSpotCommand {
            spot_id,
            user_id: user("intruder"),
        })
        .await;
    assert!(matches!(delete, Err(SpotError::Forbidden)));

    // The spot is untouched.
    let spot = app.spots.find_by_id(&spot_id).await.unwrap().unwrap();
    assert_eq!(spot.name(), "Guarded Spot");
    assert_eq!(spot.price().value(), 100.0);
}

#[tokio::test]
async fn deleting_a_spot_cascades_its_reviews() {
    let app = app();
    let spot_id = create_spot(&app, "host-1", "Doomed Spot", 100.0).await;
    add_review(&app, spot_id, "guest-1", 3).await;

    app.delete_spot
        .handle(DeleteSpotCommand {
            spot_id,
            user_id: user("host-1"),
        })
        .await
        .unwrap();

    assert!(app.spots.find_by_id(&spot_id).await.unwrap().is_none());
    assert!(app.reviews.find_by_spot(&spot_id).await.unwrap().is_empty());
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn listing_pages_and_filters_across_many_spots() {
    let app = app();
    for i in 0..25 {
        create_spot(&app, "host-1", &format!("Spot {}", i), 50.0 + i as f64).await;
    }

    let page1 = app.list_spots.handle(ListSpotsQuery::default()).await.unwrap();
    assert_eq!(page1.items.len(), 20);

    let page2 = app
        .list_spots
        .handle(ListSpotsQuery {
            page: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page2.items.len(), 5);

    // 60..=70 inclusive covers 11 spots (prices 60..=70).
    let filtered = app
        .list_spots
        .handle(ListSpotsQuery {
            min_price: Some(60.0),
            max_price: Some(70.0),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(filtered.items.len(), 11);
}

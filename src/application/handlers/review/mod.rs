//! Review command and query handlers.

mod add_review_image;
mod create_review;
mod delete_review;
mod delete_review_image;
mod list_spot_reviews;
mod rating_refresh;
mod update_review;

pub use add_review_image::{AddReviewImageCommand, AddReviewImageHandler};
pub use create_review::{CreateReviewCommand, CreateReviewHandler};
pub use delete_review::{DeleteReviewCommand, DeleteReviewHandler};
pub use delete_review_image::{DeleteReviewImageCommand, DeleteReviewImageHandler};
pub use list_spot_reviews::{ListSpotReviewsHandler, ListSpotReviewsQuery, ReviewView};
pub use rating_refresh::SpotRatingRefresher;
pub use update_review::{UpdateReviewCommand, UpdateReviewHandler};

//! HTTP adapters - REST API implementations.

pub mod error;
pub mod middleware;
pub mod review;
pub mod spot;

pub use review::{review_routes, ReviewHandlers};
pub use spot::{spot_routes, SpotHandlers};

//! HTTP adapter for spot endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SpotHandlers;
pub use routes::spot_routes;

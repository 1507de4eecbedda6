//! Storage adapters that do not need a database.

mod in_memory;

pub use in_memory::{
    InMemoryReviewImageRepository, InMemoryReviewRepository, InMemorySpotImageRepository,
    InMemorySpotRepository, InMemoryStore,
};

//! Spot domain - rentable listings, their images, and review aggregation.

mod aggregate;
mod errors;
mod filter;
mod image;
mod rating;

pub use aggregate::{Spot, SpotDetails, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
pub use errors::SpotError;
pub use filter::{
    filter_and_paginate, PageParams, PriceRange, DEFAULT_PAGE, DEFAULT_SIZE, MAX_SIZE,
};
pub use image::SpotImage;
pub use rating::{RatingSummary, UNRATED_LABEL};

//! ListSpotsHandler - Query handler for the paginated spot index.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::foundation::DomainError;
use crate::domain::spot::{filter_and_paginate, PageParams, PriceRange, Spot, SpotError};
use crate::ports::{SpotImageRepository, SpotRepository};

/// Query for the spot index. Raw values are validated at the HTTP layer;
/// here they are already well-formed options.
#[derive(Debug, Clone, Default)]
pub struct ListSpotsQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// One row of the index: the spot plus its preview image URL.
///
/// The review summary comes from the spot's denormalized columns, which
/// the rating refresher keeps current.
#[derive(Debug, Clone)]
pub struct SpotSummary {
    pub spot: Spot,
    pub preview_image: Option<String>,
}

/// A page of the spot index.
#[derive(Debug, Clone)]
pub struct SpotList {
    pub items: Vec<SpotSummary>,
    pub page: u32,
    pub size: u32,
}

/// Handler for listing spots.
pub struct ListSpotsHandler {
    spots: Arc<dyn SpotRepository>,
    spot_images: Arc<dyn SpotImageRepository>,
}

impl ListSpotsHandler {
    pub fn new(spots: Arc<dyn SpotRepository>, spot_images: Arc<dyn SpotImageRepository>) -> Self {
        Self { spots, spot_images }
    }

    pub async fn handle(&self, query: ListSpotsQuery) -> Result<SpotList, SpotError> {
        let params = PageParams::new(query.page, query.size);
        let range = PriceRange::new(query.min_price, query.max_price);

        // Load once in stable order, then filter and slice in process.
        let all = self.spots.list_all().await?;
        let page = filter_and_paginate(&all, &range, &params);

        // Preview lookups are independent per spot; fetch them concurrently.
        let items = try_join_all(page.into_iter().map(|spot| {
            let images = Arc::clone(&self.spot_images);
            async move {
                let preview_image = images
                    .find_by_spot(spot.id())
                    .await?
                    .iter()
                    .find(|i| i.is_preview())
                    .map(|i| i.url().to_string());
                Ok::<SpotSummary, DomainError>(SpotSummary {
                    spot,
                    preview_image,
                })
            }
        }))
        .await?;

        Ok(SpotList {
            items,
            page: params.page(),
            size: params.size(),
        })
    }
}

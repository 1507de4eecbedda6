//! SpotRatingRefresher - keeps a spot's denormalized review summary fresh.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SpotId};
use crate::domain::spot::RatingSummary;
use crate::ports::{ReviewRepository, SpotRepository};

/// Recomputes and persists a spot's `num_reviews`/`avg_rating` columns.
///
/// Called after every review create, edit, and delete. The summary is
/// always rebuilt from the full current review set - no incremental
/// counters that could drift. Refreshing a spot that no longer exists is
/// a no-op, not an error: there is nothing left to update.
pub struct SpotRatingRefresher {
    spots: Arc<dyn SpotRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl SpotRatingRefresher {
    pub fn new(spots: Arc<dyn SpotRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { spots, reviews }
    }

    pub async fn refresh(&self, spot_id: SpotId) -> Result<(), DomainError> {
        let Some(mut spot) = self.spots.find_by_id(&spot_id).await? else {
            return Ok(());
        };

        let reviews = self.reviews.find_by_spot(&spot_id).await?;
        let stars: Vec<_> = reviews.iter().map(|r| r.stars()).collect();
        spot.apply_rating(RatingSummary::from_stars(&stars));

        self.spots.update(&spot).await
    }
}

//! UpdateSpotHandler - Command handler for editing spot details.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OwnedByUser, SpotId, UserId};
use crate::domain::spot::{Spot, SpotDetails, SpotError};
use crate::ports::SpotRepository;

/// Command to update a spot's listing details.
#[derive(Debug, Clone)]
pub struct UpdateSpotCommand {
    pub spot_id: SpotId,
    pub user_id: UserId,
    pub details: SpotDetails,
}

/// Handler for updating spots.
pub struct UpdateSpotHandler {
    spots: Arc<dyn SpotRepository>,
}

impl UpdateSpotHandler {
    pub fn new(spots: Arc<dyn SpotRepository>) -> Self {
        Self { spots }
    }

    pub async fn handle(&self, cmd: UpdateSpotCommand) -> Result<Spot, SpotError> {
        // 1. Validate before touching storage
        cmd.details
            .validate()
            .map_err(|errors| SpotError::from(DomainError::validation_errors(errors)))?;

        // 2. Locate
        let mut spot = self
            .spots
            .find_by_id(&cmd.spot_id)
            .await?
            .ok_or_else(|| SpotError::not_found(cmd.spot_id))?;

        // 3. Authorize - only the owner may edit
        spot.check_ownership(&cmd.user_id)?;

        // 4. Mutate and persist
        spot.update_details(cmd.details)?;
        self.spots.update(&spot).await?;

        Ok(spot)
    }
}

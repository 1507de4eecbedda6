//! CreateSpotHandler - Command handler for creating new spots.

use std::sync::Arc;

use crate::domain::foundation::{SpotId, UserId};
use crate::domain::spot::{Spot, SpotDetails, SpotError};
use crate::ports::SpotRepository;

/// Command to create a new spot.
///
/// Ownership is assigned from the acting user, not checked: anyone
/// authenticated may list a spot.
#[derive(Debug, Clone)]
pub struct CreateSpotCommand {
    pub user_id: UserId,
    pub details: SpotDetails,
}

/// Handler for creating spots.
pub struct CreateSpotHandler {
    spots: Arc<dyn SpotRepository>,
}

impl CreateSpotHandler {
    pub fn new(spots: Arc<dyn SpotRepository>) -> Self {
        Self { spots }
    }

    pub async fn handle(&self, cmd: CreateSpotCommand) -> Result<Spot, SpotError> {
        // 1. Validate and build the aggregate
        let spot = Spot::new(SpotId::new(), cmd.user_id, cmd.details)?;

        // 2. Persist
        self.spots.save(&spot).await?;

        Ok(spot)
    }
}

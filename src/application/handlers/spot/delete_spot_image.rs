//! DeleteSpotImageHandler - Command handler for removing a spot image.

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, SpotId, SpotImageId, UserId};
use crate::domain::spot::SpotError;
use crate::ports::{SpotImageRepository, SpotRepository};

/// Command to delete an image from a spot.
#[derive(Debug, Clone)]
pub struct DeleteSpotImageCommand {
    pub spot_id: SpotId,
    pub image_id: SpotImageId,
    pub user_id: UserId,
}

/// Handler for deleting spot images.
pub struct DeleteSpotImageHandler {
    spots: Arc<dyn SpotRepository>,
    spot_images: Arc<dyn SpotImageRepository>,
}

impl DeleteSpotImageHandler {
    pub fn new(spots: Arc<dyn SpotRepository>, spot_images: Arc<dyn SpotImageRepository>) -> Self {
        Self { spots, spot_images }
    }

    pub async fn handle(&self, cmd: DeleteSpotImageCommand) -> Result<(), SpotError> {
        // 1. Locate the parent
        let spot = self
            .spots
            .find_by_id(&cmd.spot_id)
            .await?
            .ok_or_else(|| SpotError::not_found(cmd.spot_id))?;

        // 2. Authorize against the parent's owner
        spot.check_ownership(&cmd.user_id)?;

        // 3. Locate the image under this spot
        let image = self
            .spot_images
            .find_by_id_and_spot(&cmd.image_id, &cmd.spot_id)
            .await?
            .ok_or_else(|| SpotError::image_not_found(cmd.image_id))?;

        // 4. Destroy
        self.spot_images.delete(image.id()).await?;

        Ok(())
    }
}

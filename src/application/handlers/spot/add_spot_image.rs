//! AddSpotImageHandler - Command handler for uploading a spot image.

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, SpotId, SpotImageId, UserId};
use crate::domain::spot::{SpotError, SpotImage};
use crate::ports::{BlobStorage, FileUpload, SpotImageRepository, SpotRepository};

/// Command to upload and attach an image to a spot.
#[derive(Debug, Clone)]
pub struct AddSpotImageCommand {
    pub spot_id: SpotId,
    pub user_id: UserId,
    pub file: FileUpload,
    pub preview: bool,
}

/// Handler for spot image uploads.
///
/// The blob store does the actual upload and hands back a URL; only that
/// URL is recorded against the image entity.
pub struct AddSpotImageHandler {
    spots: Arc<dyn SpotRepository>,
    spot_images: Arc<dyn SpotImageRepository>,
    blobs: Arc<dyn BlobStorage>,
}

impl AddSpotImageHandler {
    pub fn new(
        spots: Arc<dyn SpotRepository>,
        spot_images: Arc<dyn SpotImageRepository>,
        blobs: Arc<dyn BlobStorage>,
    ) -> Self {
        Self {
            spots,
            spot_images,
            blobs,
        }
    }

    pub async fn handle(&self, cmd: AddSpotImageCommand) -> Result<SpotImage, SpotError> {
        // 1. Locate
        let spot = self
            .spots
            .find_by_id(&cmd.spot_id)
            .await?
            .ok_or_else(|| SpotError::not_found(cmd.spot_id))?;

        // 2. Authorize
        spot.check_ownership(&cmd.user_id)?;

        // 3. Upload, then record the returned URL
        let url = self.blobs.store(cmd.file).await?;
        let image = SpotImage::new(SpotImageId::new(), cmd.spot_id, url, cmd.preview);
        self.spot_images.save(&image).await?;

        Ok(image)
    }
}

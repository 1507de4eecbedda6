//! Image attached to a spot listing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SpotId, SpotImageId, Timestamp};

/// An image attached to a spot. At most one image per spot should carry
/// the preview flag; the list endpoint picks the first that does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotImage {
    id: SpotImageId,
    spot_id: SpotId,
    url: String,
    preview: bool,
    created_at: Timestamp,
}

impl SpotImage {
    /// Creates a new image record for an uploaded file.
    pub fn new(id: SpotImageId, spot_id: SpotId, url: String, preview: bool) -> Self {
        Self {
            id,
            spot_id,
            url,
            preview,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute from persistence.
    pub fn reconstitute(
        id: SpotImageId,
        spot_id: SpotId,
        url: String,
        preview: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            spot_id,
            url,
            preview,
            created_at,
        }
    }

    pub fn id(&self) -> &SpotImageId {
        &self.id
    }

    pub fn spot_id(&self) -> &SpotId {
        &self.spot_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

//! HTTP DTOs for spot endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::spot::{SpotSummary, SpotView};
use crate::domain::spot::{Spot, SpotDetails, SpotImage};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body for creating or editing a spot.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotDetailsRequest {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<SpotDetailsRequest> for SpotDetails {
    fn from(req: SpotDetailsRequest) -> Self {
        Self {
            address: req.address,
            city: req.city,
            state: req.state,
            country: req.country,
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}

/// Raw query parameters for the spot index.
///
/// Values come in wide so out-of-range input can be rejected with the
/// contract's field messages instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSpotsQueryParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ListSpotsQueryParams {
    /// Checks every rule; on failure returns the full list of violations.
    pub fn validate(&self) -> Result<(), Vec<(String, String)>> {
        let mut errors = Vec::new();

        if let Some(page) = self.page {
            if page < 1 {
                errors.push((
                    "page".to_string(),
                    "Page must be greater than or equal to 1".to_string(),
                ));
            }
        }
        if let Some(size) = self.size {
            if !(1..=20).contains(&size) {
                errors.push((
                    "size".to_string(),
                    "Size must be between 1 and 20".to_string(),
                ));
            }
        }
        if let Some(min) = self.min_price {
            if min < 0.0 {
                errors.push((
                    "minPrice".to_string(),
                    "Minimum price must be greater than or equal to 0".to_string(),
                ));
            }
        }
        if let Some(max) = self.max_price {
            if max < 0.0 {
                errors.push((
                    "maxPrice".to_string(),
                    "Maximum price must be greater than or equal to 0".to_string(),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Core spot fields shared by every response shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotRecordResponse {
    pub id: String,
    pub owner_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Spot> for SpotRecordResponse {
    fn from(spot: &Spot) -> Self {
        use crate::domain::foundation::OwnedByUser;

        Self {
            id: spot.id().to_string(),
            owner_id: spot.owner_id().to_string(),
            address: spot.address().to_string(),
            city: spot.city().to_string(),
            state: spot.state().to_string(),
            country: spot.country().to_string(),
            name: spot.name().to_string(),
            description: spot.description().to_string(),
            price: spot.price().value(),
            created_at: spot.created_at().to_rfc3339(),
            updated_at: spot.updated_at().to_rfc3339(),
        }
    }
}

/// Nested image entry in the spot detail view.
#[derive(Debug, Clone, Serialize)]
pub struct SpotImageSummary {
    pub id: String,
    pub url: String,
    pub preview: bool,
}

impl From<&SpotImage> for SpotImageSummary {
    fn from(image: &SpotImage) -> Self {
        Self {
            id: image.id().to_string(),
            url: image.url().to_string(),
            preview: image.is_preview(),
        }
    }
}

/// Full detail view: spot fields plus live aggregates and images.
///
/// `avgRating` is the mean formatted to one decimal, or `"New"` for a
/// spot with no reviews.
#[derive(Debug, Clone, Serialize)]
pub struct SpotResponse {
    #[serde(flatten)]
    pub spot: SpotRecordResponse,
    #[serde(rename = "numReviews")]
    pub num_reviews: u32,
    #[serde(rename = "avgRating")]
    pub avg_rating: String,
    #[serde(rename = "SpotImages")]
    pub images: Vec<SpotImageSummary>,
}

impl From<SpotView> for SpotResponse {
    fn from(view: SpotView) -> Self {
        Self {
            spot: SpotRecordResponse::from(&view.spot),
            num_reviews: view.rating.count(),
            avg_rating: view.rating.display_average(),
            images: view.images.iter().map(SpotImageSummary::from).collect(),
        }
    }
}

/// One row of the paginated index.
#[derive(Debug, Clone, Serialize)]
pub struct SpotSummaryResponse {
    #[serde(flatten)]
    pub spot: SpotRecordResponse,
    #[serde(rename = "avgRating")]
    pub avg_rating: String,
    #[serde(rename = "previewImage")]
    pub preview_image: Option<String>,
}

impl From<SpotSummary> for SpotSummaryResponse {
    fn from(summary: SpotSummary) -> Self {
        Self {
            avg_rating: summary.spot.rating().display_average(),
            spot: SpotRecordResponse::from(&summary.spot),
            preview_image: summary.preview_image,
        }
    }
}

/// Envelope for the paginated index.
#[derive(Debug, Clone, Serialize)]
pub struct SpotListResponse {
    #[serde(rename = "Spots")]
    pub spots: Vec<SpotSummaryResponse>,
    pub page: u32,
    pub size: u32,
}

/// A newly attached spot image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotImageResponse {
    pub id: String,
    pub spot_id: String,
    pub url: String,
    pub preview: bool,
}

impl From<&SpotImage> for SpotImageResponse {
    fn from(image: &SpotImage) -> Self {
        Self {
            id: image.id().to_string(),
            spot_id: image.spot_id().to_string(),
            url: image.url().to_string(),
            preview: image.is_preview(),
        }
    }
}

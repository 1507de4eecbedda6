//! Review rating aggregation for a spot.
//!
//! The summary is always recomputed from the full review set, never
//! patched incrementally, so deletes and edits cannot leave it stale.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Stars;

/// Label shown for a spot that has no reviews yet.
pub const UNRATED_LABEL: &str = "New";

/// Denormalized review summary: how many reviews, and their mean rating.
///
/// `average` is `None` until the first review exists - "no data" is kept
/// distinct from a zero rating. The mean is rounded to one fractional
/// digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    count: u32,
    average: Option<f64>,
}

impl RatingSummary {
    /// Computes the summary over a spot's full review set.
    ///
    /// An empty slice is a valid input and yields the unrated summary.
    pub fn from_stars(stars: &[Stars]) -> Self {
        if stars.is_empty() {
            return Self::default();
        }

        let sum: u32 = stars.iter().map(|s| u32::from(s.value())).sum();
        let mean = f64::from(sum) / stars.len() as f64;
        Self {
            count: stars.len() as u32,
            average: Some(round_to_tenth(mean)),
        }
    }

    /// Reconstitutes a summary from persisted columns.
    pub fn from_parts(count: u32, average: Option<f64>) -> Self {
        Self { count, average }
    }

    /// Number of reviews.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Mean star rating, or `None` when there are no reviews.
    pub fn average(&self) -> Option<f64> {
        self.average
    }

    /// Renders the average for API payloads: `"4.2"`, or `"New"` when unrated.
    pub fn display_average(&self) -> String {
        match self.average {
            Some(avg) => format!("{:.1}", avg),
            None => UNRATED_LABEL.to_string(),
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

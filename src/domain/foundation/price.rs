//! Price value object - a strictly positive nightly rate.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Nightly price for a spot. Always finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Creates a Price, returning error unless the value is finite and positive.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ValidationError::invalid_format(
                "price",
                "must be a positive number",
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A pickup or delivery point.
///
/// Coordinates are geographic, not monetary, so they stay `f64`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    /// State or province code (e.g., "OK", "TX").
    pub state: String,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            zip_code: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Check required fields and coordinate ranges. `role` prefixes field
    /// names in errors (e.g., "origin.city").
    pub fn validate(&self, role: &str) -> Result<(), ValidationError> {
        if self.city.trim().is_empty() {
            return Err(ValidationError::EmptyField(format!("{role}.city")));
        }
        if self.state.trim().is_empty() {
            return Err(ValidationError::EmptyField(format!("{role}.state")));
        }
        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ValidationError::InvalidCoordinate {
                    field: format!("{role}.latitude"),
                    value: lat,
                });
            }
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(ValidationError::InvalidCoordinate {
                    field: format!("{role}.longitude"),
                    value: lon,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

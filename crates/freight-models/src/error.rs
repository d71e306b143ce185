use chrono::{DateTime, Utc};
use thiserror::Error;

/// Raised when raw shipment data cannot become a `Load`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Required field is empty: {0}")]
    EmptyField(String),

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: String, value: String },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: String },

    #[error("{field} exceeds the representable decimal range")]
    OutOfRange { field: String },

    #[error("Delivery date {delivery} precedes pickup date {pickup}")]
    DeliveryBeforePickup {
        pickup: DateTime<Utc>,
        delivery: DateTime<Utc>,
    },

    #[error("Pickup window ends at {end} before it starts at {start}")]
    PickupWindowInverted {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Unknown load status: {0}")]
    UnknownStatus(String),

    #[error("Unknown load type: {0}")]
    UnknownLoadType(String),

    #[error("{field} out of range: {value}")]
    InvalidCoordinate { field: String, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid rate thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Invalid equipment config: {0}")]
    InvalidEquipment(String),

    #[error("Invalid operating costs: {0}")]
    InvalidCosts(String),
}

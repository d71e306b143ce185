use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowercases and folds `-`/space separators so board feeds spelling
/// `IN_TRANSIT`, `in-transit` or `Dry Van` all resolve.
fn normalize(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(|c: char| c == '-' || c == ' ', "_")
}

/// Where a load sits in its booking lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Available,
    Booked,
    InTransit,
    Delivered,
    Cancelled,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            "in_transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

/// Equipment category the load requires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadType {
    Flatbed,
    #[default]
    Hotshot,
    Reefer,
    DryVan,
}

impl LoadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flatbed => "flatbed",
            Self::Hotshot => "hotshot",
            Self::Reefer => "reefer",
            Self::DryVan => "dry_van",
        }
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "flatbed" => Ok(Self::Flatbed),
            "hotshot" => Ok(Self::Hotshot),
            "reefer" => Ok(Self::Reefer),
            "dry_van" => Ok(Self::DryVan),
            _ => Err(ValidationError::UnknownLoadType(s.to_string())),
        }
    }
}

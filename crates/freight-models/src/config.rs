use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Business configuration consumed by load evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FreightConfig {
    pub rates: RateThresholds,
    pub equipment: EquipmentConfig,
    pub costs: OperatingCosts,
}

impl FreightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rates.validate()?;
        self.equipment.validate()?;
        self.costs.validate()
    }
}

/// Rate-per-mile tiers and the deadhead ceiling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RateThresholds {
    /// Floor below which a load is rejected (USD per loaded mile).
    pub minimum_rate_per_mile: Decimal,
    pub target_rate_per_mile: Decimal,
    pub premium_rate_per_mile: Decimal,
    /// 0 to 100.
    pub max_deadhead_percentage: Decimal,
}

impl Default for RateThresholds {
    fn default() -> Self {
        Self {
            minimum_rate_per_mile: Decimal::new(200, 2),
            target_rate_per_mile: Decimal::new(250, 2),
            premium_rate_per_mile: Decimal::new(300, 2),
            max_deadhead_percentage: Decimal::new(20, 0),
        }
    }
}

impl RateThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_rate_per_mile <= Decimal::ZERO {
            return Err(ConfigError::InvalidThresholds(format!(
                "minimum_rate_per_mile must be positive, got {}",
                self.minimum_rate_per_mile
            )));
        }
        if self.max_deadhead_percentage < Decimal::ZERO
            || self.max_deadhead_percentage > Decimal::ONE_HUNDRED
        {
            return Err(ConfigError::InvalidThresholds(format!(
                "max_deadhead_percentage must be within 0-100, got {}",
                self.max_deadhead_percentage
            )));
        }
        if self.target_rate_per_mile < self.minimum_rate_per_mile
            || self.premium_rate_per_mile < self.target_rate_per_mile
        {
            return Err(ConfigError::InvalidThresholds(format!(
                "rate tiers out of order: minimum {} / target {} / premium {}",
                self.minimum_rate_per_mile, self.target_rate_per_mile, self.premium_rate_per_mile
            )));
        }
        Ok(())
    }
}

/// Capacity of the truck/trailer combination being dispatched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EquipmentConfig {
    /// Heaviest load the trailer is rated for (pounds).
    pub max_weight_lbs: u32,
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            max_weight_lbs: 16_500,
        }
    }
}

impl EquipmentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_weight_lbs == 0 {
            return Err(ConfigError::InvalidEquipment(
                "max_weight_lbs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-mile running costs used to estimate net profit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OperatingCosts {
    /// Non-fuel cost per mile driven, loaded or empty (USD).
    pub cost_per_mile: Decimal,
    pub fuel_cost_per_gallon: Decimal,
    pub truck_mpg: Decimal,
}

impl Default for OperatingCosts {
    fn default() -> Self {
        Self {
            cost_per_mile: Decimal::new(39, 2),
            fuel_cost_per_gallon: Decimal::new(350, 2),
            truck_mpg: Decimal::new(9, 0),
        }
    }
}

impl OperatingCosts {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cost_per_mile < Decimal::ZERO || self.fuel_cost_per_gallon < Decimal::ZERO {
            return Err(ConfigError::InvalidCosts(format!(
                "costs must not be negative: cost_per_mile {} / fuel_cost_per_gallon {}",
                self.cost_per_mile, self.fuel_cost_per_gallon
            )));
        }
        if self.truck_mpg <= Decimal::ZERO {
            return Err(ConfigError::InvalidCosts(format!(
                "truck_mpg must be positive, got {}",
                self.truck_mpg
            )));
        }
        Ok(())
    }
}

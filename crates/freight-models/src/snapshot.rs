use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::load::LoadRecord;

/// Derived profitability figures for one load, as computed at export time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadMetrics {
    pub total_miles: Decimal,
    /// 0 to 100.
    pub deadhead_percentage: Decimal,
    pub gross_revenue: Decimal,
    /// Gross revenue per loaded mile.
    pub rate_per_mile: Decimal,
    /// Gross revenue per mile including deadhead.
    pub all_miles_rate: Decimal,
    pub trip_duration_hours: Decimal,
}

/// Serialized form of a `Load`: stored fields and derived metrics side by
/// side in one flat object, for agent reasoning logs and external stores.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoadSnapshot {
    #[serde(flatten)]
    pub record: LoadRecord,
    #[serde(flatten)]
    pub metrics: LoadMetrics,
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateThresholds;
use crate::error::ValidationError;
use crate::location::Location;
use crate::snapshot::{LoadMetrics, LoadSnapshot};
use crate::status::{LoadStatus, LoadType};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Special handling the load calls for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SpecialRequirements {
    pub hazmat: bool,
    pub team_required: bool,
    pub expedited: bool,
    pub requires_tarp: bool,
}

/// Broker-side point of contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Raw shipment data as supplied by ingestion tooling or manual entry.
///
/// Nothing here is checked. `Load::new` turns a record into a validated `Load`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadRecord {
    pub load_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_load_type")]
    pub load_type: String,
    pub origin: Location,
    pub destination: Location,
    pub pickup_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    /// Miles driven while carrying the freight.
    pub loaded_miles: Decimal,
    /// Empty miles to reach pickup or after delivery.
    #[serde(default)]
    pub deadhead_miles: Decimal,
    /// Base linehaul rate (USD).
    pub rate: Decimal,
    #[serde(default)]
    pub fuel_surcharge: Decimal,
    /// Detention, layover and similar fees (USD).
    #[serde(default)]
    pub accessorial_charges: Decimal,
    /// Pounds.
    pub weight: u32,
    pub commodity: String,

    pub broker_name: Option<String>,
    pub broker_mc: Option<String>,
    pub reference_number: Option<String>,
    pub posted_date: Option<DateTime<Utc>>,
    pub pickup_window_start: Option<DateTime<Utc>>,
    pub pickup_window_end: Option<DateTime<Utc>>,
    /// Feet.
    pub length_ft: Option<u32>,
    pub trailer_type: Option<String>,
    #[serde(default)]
    pub requirements: SpecialRequirements,
    pub contact: Option<Contact>,
    pub notes: Option<String>,
}

fn default_status() -> String {
    LoadStatus::default().as_str().to_string()
}

fn default_load_type() -> String {
    LoadType::default().as_str().to_string()
}

/// A validated freight shipment.
///
/// Fields are frozen after construction; derived metrics are recomputed on
/// every call. Status changes go through [`Load::with_status`], which returns
/// a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "LoadSnapshot", try_from = "LoadRecord")]
pub struct Load {
    load_id: String,
    status: LoadStatus,
    load_type: LoadType,
    origin: Location,
    destination: Location,
    pickup_date: DateTime<Utc>,
    delivery_date: DateTime<Utc>,
    loaded_miles: Decimal,
    deadhead_miles: Decimal,
    rate: Decimal,
    fuel_surcharge: Decimal,
    accessorial_charges: Decimal,
    weight: u32,
    commodity: String,
    broker_name: Option<String>,
    broker_mc: Option<String>,
    reference_number: Option<String>,
    posted_date: Option<DateTime<Utc>>,
    pickup_window_start: Option<DateTime<Utc>>,
    pickup_window_end: Option<DateTime<Utc>>,
    length_ft: Option<u32>,
    trailer_type: Option<String>,
    requirements: SpecialRequirements,
    contact: Option<Contact>,
    notes: Option<String>,
}

fn require_positive(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn require_non_negative(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// `numerator / denominator`, or zero when the division is undefined.
fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

impl Load {
    /// Validate a raw record. The first violated invariant is reported.
    pub fn new(record: LoadRecord) -> Result<Self, ValidationError> {
        if record.load_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("load_id".to_string()));
        }
        let status: LoadStatus = record.status.parse()?;
        let load_type: LoadType = record.load_type.parse()?;

        record.origin.validate("origin")?;
        record.destination.validate("destination")?;

        if record.delivery_date < record.pickup_date {
            return Err(ValidationError::DeliveryBeforePickup {
                pickup: record.pickup_date,
                delivery: record.delivery_date,
            });
        }
        if let (Some(start), Some(end)) = (record.pickup_window_start, record.pickup_window_end) {
            if end < start {
                return Err(ValidationError::PickupWindowInverted { start, end });
            }
        }

        require_positive("loaded_miles", record.loaded_miles)?;
        require_non_negative("deadhead_miles", record.deadhead_miles)?;
        require_positive("rate", record.rate)?;
        require_non_negative("fuel_surcharge", record.fuel_surcharge)?;
        require_non_negative("accessorial_charges", record.accessorial_charges)?;

        // Derived metrics add these without checks, so the sums must fit.
        if record.loaded_miles.checked_add(record.deadhead_miles).is_none() {
            return Err(ValidationError::OutOfRange {
                field: "total_miles".to_string(),
            });
        }
        if record
            .rate
            .checked_add(record.fuel_surcharge)
            .and_then(|sum| sum.checked_add(record.accessorial_charges))
            .is_none()
        {
            return Err(ValidationError::OutOfRange {
                field: "gross_revenue".to_string(),
            });
        }

        if record.weight == 0 {
            return Err(ValidationError::NotPositive {
                field: "weight".to_string(),
                value: "0".to_string(),
            });
        }
        if record.length_ft == Some(0) {
            return Err(ValidationError::NotPositive {
                field: "length_ft".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(Self {
            load_id: record.load_id,
            status,
            load_type,
            origin: record.origin,
            destination: record.destination,
            pickup_date: record.pickup_date,
            delivery_date: record.delivery_date,
            loaded_miles: record.loaded_miles,
            deadhead_miles: record.deadhead_miles,
            rate: record.rate,
            fuel_surcharge: record.fuel_surcharge,
            accessorial_charges: record.accessorial_charges,
            weight: record.weight,
            commodity: record.commodity,
            broker_name: record.broker_name,
            broker_mc: record.broker_mc,
            reference_number: record.reference_number,
            posted_date: record.posted_date,
            pickup_window_start: record.pickup_window_start,
            pickup_window_end: record.pickup_window_end,
            length_ft: record.length_ft,
            trailer_type: record.trailer_type,
            requirements: record.requirements,
            contact: record.contact,
            notes: record.notes,
        })
    }

    /// A copy of this load with a different status.
    pub fn with_status(&self, status: LoadStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// The stored fields back in raw form.
    pub fn to_record(&self) -> LoadRecord {
        LoadRecord {
            load_id: self.load_id.clone(),
            status: self.status.as_str().to_string(),
            load_type: self.load_type.as_str().to_string(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            pickup_date: self.pickup_date,
            delivery_date: self.delivery_date,
            loaded_miles: self.loaded_miles,
            deadhead_miles: self.deadhead_miles,
            rate: self.rate,
            fuel_surcharge: self.fuel_surcharge,
            accessorial_charges: self.accessorial_charges,
            weight: self.weight,
            commodity: self.commodity.clone(),
            broker_name: self.broker_name.clone(),
            broker_mc: self.broker_mc.clone(),
            reference_number: self.reference_number.clone(),
            posted_date: self.posted_date,
            pickup_window_start: self.pickup_window_start,
            pickup_window_end: self.pickup_window_end,
            length_ft: self.length_ft,
            trailer_type: self.trailer_type.clone(),
            requirements: self.requirements,
            contact: self.contact.clone(),
            notes: self.notes.clone(),
        }
    }

    pub fn metrics(&self) -> LoadMetrics {
        LoadMetrics {
            total_miles: self.total_miles(),
            deadhead_percentage: self.deadhead_percentage(),
            gross_revenue: self.gross_revenue(),
            rate_per_mile: self.rate_per_mile(),
            all_miles_rate: self.all_miles_rate(),
            trip_duration_hours: self.trip_duration_hours(),
        }
    }

    /// Stored fields and derived metrics as one flat JSON object.
    pub fn to_map(&self) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "load serialized to non-object value: {other}"
            ))),
        }
    }

    // --- Derived metrics ---

    pub fn total_miles(&self) -> Decimal {
        self.loaded_miles + self.deadhead_miles
    }

    /// Deadhead share of all miles, 0-100. Zero when there are no miles.
    pub fn deadhead_percentage(&self) -> Decimal {
        ratio(self.deadhead_miles, self.total_miles()) * ONE_HUNDRED
    }

    pub fn gross_revenue(&self) -> Decimal {
        self.rate + self.fuel_surcharge + self.accessorial_charges
    }

    /// Gross revenue per loaded mile. Deadhead is unpaid so it is excluded.
    pub fn rate_per_mile(&self) -> Decimal {
        ratio(self.gross_revenue(), self.loaded_miles)
    }

    /// Gross revenue spread across loaded and deadhead miles.
    pub fn all_miles_rate(&self) -> Decimal {
        ratio(self.gross_revenue(), self.total_miles())
    }

    pub fn trip_duration_hours(&self) -> Decimal {
        let elapsed = self.delivery_date - self.pickup_date;
        ratio(
            Decimal::from(elapsed.num_milliseconds()),
            Decimal::from(MILLIS_PER_HOUR),
        )
    }

    /// True only when the rate floor AND the deadhead ceiling are both met.
    pub fn is_profitable(&self, min_rpm: Decimal, max_deadhead_pct: Decimal) -> bool {
        self.rate_per_mile() >= min_rpm && self.deadhead_percentage() <= max_deadhead_pct
    }

    pub fn meets(&self, thresholds: &RateThresholds) -> bool {
        self.is_profitable(
            thresholds.minimum_rate_per_mile,
            thresholds.max_deadhead_percentage,
        )
    }

    // --- Accessors ---

    pub fn load_id(&self) -> &str {
        &self.load_id
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn load_type(&self) -> LoadType {
        self.load_type
    }

    pub fn origin(&self) -> &Location {
        &self.origin
    }

    pub fn destination(&self) -> &Location {
        &self.destination
    }

    pub fn pickup_date(&self) -> DateTime<Utc> {
        self.pickup_date
    }

    pub fn delivery_date(&self) -> DateTime<Utc> {
        self.delivery_date
    }

    pub fn loaded_miles(&self) -> Decimal {
        self.loaded_miles
    }

    pub fn deadhead_miles(&self) -> Decimal {
        self.deadhead_miles
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn fuel_surcharge(&self) -> Decimal {
        self.fuel_surcharge
    }

    pub fn accessorial_charges(&self) -> Decimal {
        self.accessorial_charges
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn commodity(&self) -> &str {
        &self.commodity
    }

    pub fn broker_name(&self) -> Option<&str> {
        self.broker_name.as_deref()
    }

    pub fn broker_mc(&self) -> Option<&str> {
        self.broker_mc.as_deref()
    }

    pub fn reference_number(&self) -> Option<&str> {
        self.reference_number.as_deref()
    }

    pub fn posted_date(&self) -> Option<DateTime<Utc>> {
        self.posted_date
    }

    pub fn pickup_window(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        (self.pickup_window_start, self.pickup_window_end)
    }

    pub fn length_ft(&self) -> Option<u32> {
        self.length_ft
    }

    pub fn trailer_type(&self) -> Option<&str> {
        self.trailer_type.as_deref()
    }

    pub fn requirements(&self) -> SpecialRequirements {
        self.requirements
    }

    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl TryFrom<LoadRecord> for Load {
    type Error = ValidationError;

    fn try_from(record: LoadRecord) -> Result<Self, Self::Error> {
        Self::new(record)
    }
}

impl From<Load> for LoadSnapshot {
    fn from(load: Load) -> Self {
        LoadSnapshot {
            metrics: load.metrics(),
            record: load.to_record(),
        }
    }
}

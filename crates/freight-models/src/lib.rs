pub mod config;
pub mod error;
pub mod load;
pub mod location;
pub mod snapshot;
pub mod status;

pub use config::{EquipmentConfig, FreightConfig, OperatingCosts, RateThresholds};
pub use error::{ConfigError, ValidationError};
pub use load::{Contact, Load, LoadRecord, SpecialRequirements};
pub use location::Location;
pub use snapshot::{LoadMetrics, LoadSnapshot};
pub use status::{LoadStatus, LoadType};

//! freight-ops - profitability screening for freight loads.
//!
//! Reads raw load records, validates them into [`freight_models::Load`]
//! values, and scores each one against the configured rate thresholds.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use freight_ops::{evaluate_batch, load_config, parse_loads};
//!
//! let config = load_config("config/freight.toml").unwrap();
//! let loads = parse_loads(&std::fs::read_to_string("loads.json").unwrap()).unwrap();
//! for evaluation in evaluate_batch(&loads, &config) {
//!     println!("{} profitable={}", evaluation.load_id, evaluation.profitable);
//! }
//! ```

pub use freight_models as models;

pub mod error;
pub mod evaluation;
pub mod input;
pub mod logging;

pub use error::OpsError;
pub use evaluation::{evaluate_batch, evaluate_load, CostEstimate, LoadEvaluation, RateTier};
pub use input::{load_config, parse_loads};
pub use logging::init_logging;

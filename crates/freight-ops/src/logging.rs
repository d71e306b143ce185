use tracing_subscriber::EnvFilter;

use crate::error::OpsError;

/// Install the global subscriber. Respects `RUST_LOG`; writes to stderr so
/// stdout stays reserved for JSON output.
pub fn init_logging(json: bool) -> Result<(), OpsError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| OpsError::Logging(e.to_string()))
}

// src/logging.rs
use origen_shared_kernel::{PresentationError, PresentationResult};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so stdout stays machine-readable.
pub fn init(filter: &str) -> PresentationResult<()> {
    let env_filter = EnvFilter::try_new(filter).map_err(|e| PresentationError::InvalidValue {
        flag: "--log".to_string(),
        value: filter.to_string(),
        reason: e.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| PresentationError::LoggingInit(e.to_string()))
}

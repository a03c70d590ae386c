//! Tracing subscriber setup for explorer hosts.

use tracing_subscriber::{EnvFilter, fmt};

/// Raised when a global subscriber is already installed.
#[derive(Debug, thiserror::Error)]
#[error("tracing init failed: {message}")]
pub struct TelemetryError {
    message: String,
}

/// Install a JSON formatter filtered by `RUST_LOG`.
///
/// Hosts usually log the error and carry on:
///
/// ```rust,no_run
/// if let Err(error) = explorer::telemetry::init_tracing() {
///     tracing::warn!(%error, "tracing init failed");
/// }
/// ```
pub fn init_tracing() -> Result<(), TelemetryError> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
        .map_err(|error| TelemetryError {
            message: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_reported() {
        init_tracing().expect("first install succeeds");
        let error = init_tracing().expect_err("global subscriber already set");
        assert!(error.to_string().starts_with("tracing init failed"));
    }
}

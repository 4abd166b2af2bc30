//! `tracing` subscriber setup for provider processes.

use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a compact subscriber at `debug` or `info` level.
///
/// An already installed global subscriber is kept. Any other failure is
/// reported on stderr, since there is no subscriber to log it to.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    report(try_init_logging(level));
}

/// Installs a compact subscriber filtered by `config.log_filter`.
/// `RUST_LOG` takes precedence.
pub fn init_from_config(config: &ProviderConfig) -> ProviderResult<()> {
    try_init_logging(&config.log_filter)
}

/// Installs a compact subscriber. `RUST_LOG` takes precedence over `filter`.
pub fn try_init_logging(filter: &str) -> ProviderResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(filter)?,
    };

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| ProviderError::LoggingAlreadyInitialized(e.to_string()))
}

/// Parses `tracing` filter directives such as `info,kite_provider=debug`.
pub fn parse_filter(directives: &str) -> ProviderResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| ProviderError::Logging(e.to_string()))
}

fn report(result: ProviderResult<()>) {
    match result {
        Ok(()) | Err(ProviderError::LoggingAlreadyInitialized(_)) => {}
        Err(e) => eprintln!("kite-provider: {e}"),
    }
}

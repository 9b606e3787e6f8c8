//! Tracing setup for binaries and tests that embed the engine.

use apriori_core::config::ObservabilityConfig;
use apriori_core::constants::LOG_ENV_VAR;
use apriori_core::errors::{AprioriError, AprioriResult};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `APRIORI_LOG` wins when set and valid; otherwise `config.log_level` is
/// used. Only one subscriber can be installed per process: a second call
/// returns [`AprioriError::TracingInit`].
pub fn init_tracing(config: &ObservabilityConfig) -> AprioriResult<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.log_level)?,
    };
    install(filter, config.json_logs)
}

/// Install the global subscriber with an explicit filter directive
/// (e.g. `"apriori_engine=debug,info"`), human-readable output.
pub fn init_tracing_with_filter(filter: &str) -> AprioriResult<()> {
    install(parse_filter(filter)?, false)
}

fn parse_filter(directives: &str) -> AprioriResult<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| AprioriError::ConfigError(format!("invalid log filter {directives:?}: {e}")))
}

fn install(filter: EnvFilter, json: bool) -> AprioriResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| AprioriError::TracingInit(e.to_string()))
}

///
/// logging.rs  Oct 16th, 2026
///
/// Installs the process-wide tracing subscriber. Library code only emits
/// events; the football-stats binary calls init_logging once at startup.
///
/// What the binary relies on:
///   level from the profile's `log.log_level`, RUST_LOG wins when valid
///   `log.json: true` for line-delimited JSON (container deployments)
///   a second install is reported as LoggingError::Install, not a panic
///

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::core::config::{LogLevel, LoggingConfig};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level: {0}")]
    Level(String),
    #[error("subscriber already installed: {0}")]
    Install(String),
}

fn level_to_filter(level: LogLevel) -> Result<EnvFilter, LoggingError> {
    let lvl_str = match level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };
    EnvFilter::from_str(lvl_str).map_err(|_| LoggingError::Level(lvl_str.into()))
}

// RUST_LOG, when set and valid, wins over the configured level
fn resolve_filter(config: &LoggingConfig, env: Option<&str>) -> Result<EnvFilter, LoggingError> {
    match env.map(EnvFilter::try_new) {
        Some(Ok(filter)) => Ok(filter),
        _ => level_to_filter(config.log_level),
    }
}

pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env = std::env::var("RUST_LOG").ok();
    let filter = resolve_filter(config, env.as_deref())?;

    let fmt_layer = if config.json {
        fmt::layer().json().with_target(false).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    let subscriber = Registry::default().with(filter).with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_used_without_env() {
        let config = LoggingConfig { log_level: LogLevel::Debug, json: false };
        let filter = resolve_filter(&config, None).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn env_overrides_configured_level() {
        let config = LoggingConfig::default();
        let filter = resolve_filter(&config, Some("football_stats_client=trace")).unwrap();
        assert_eq!(filter.to_string(), "football_stats_client=trace");
    }

    #[test]
    fn second_install_is_an_error() {
        let config = LoggingConfig { log_level: LogLevel::Warn, json: true };
        let _ = init_logging(&config);
        assert!(matches!(init_logging(&config), Err(LoggingError::Install(_))));
    }
}

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::EngineConfig;
use crate::error::{AppError, Result};

/// Installs the global subscriber using `config.log_filter`.
///
/// Returns `Ok(false)` when a subscriber was already installed.
pub fn init_tracing(config: &EngineConfig) -> Result<bool> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
        AppError::Config(format!("invalid log filter '{}': {}", config.log_filter, e))
    })?;

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = EngineConfig::default();
        let _ = init_tracing(&config).unwrap();
        assert!(!init_tracing(&config).unwrap());
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        let config = EngineConfig {
            log_filter: "siakad=verbose".to_string(),
            ..EngineConfig::default()
        };
        let err = init_tracing(&config).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}

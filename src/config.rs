use std::env;
use std::sync::Arc;

use crate::error::AppError;
use crate::notification::{LogNotifier, NoopNotifier, NotificationService};

pub const DEFAULT_LOG_FILTER: &str = "siakad=debug";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationMode {
    Log,
    Disabled,
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub log_filter: String,
    pub notifications: NotificationMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            notifications: NotificationMode::Log,
        }
    }
}

impl EngineConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn new_from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let notifications = match lookup("SIAKAD_NOTIFICATIONS") {
            None => NotificationMode::Log,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "log" => NotificationMode::Log,
                "off" | "disabled" => NotificationMode::Disabled,
                other => {
                    return Err(AppError::Config(format!(
                        "SIAKAD_NOTIFICATIONS must be 'log' or 'off', got '{}'",
                        other
                    )));
                }
            },
        };

        Ok(Self {
            log_filter,
            notifications,
        })
    }

    pub fn notifier(&self) -> Arc<dyn NotificationService> {
        match self.notifications {
            NotificationMode::Log => Arc::new(LogNotifier),
            NotificationMode::Disabled => Arc::new(NoopNotifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.notifications, NotificationMode::Log);
    }

    #[test]
    fn test_reads_values() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("RUST_LOG", "siakad=info"),
            ("SIAKAD_NOTIFICATIONS", "OFF"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "siakad=info");
        assert_eq!(config.notifications, NotificationMode::Disabled);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let err = EngineConfig::from_lookup(lookup_from(&[("SIAKAD_NOTIFICATIONS", "smtp")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[tokio::test]
    async fn test_notifier_accepts_email() {
        for mode in [NotificationMode::Log, NotificationMode::Disabled] {
            let config = EngineConfig {
                notifications: mode,
                ..EngineConfig::default()
            };
            config
                .notifier()
                .send_email("arga@mail.com", "Test", "body")
                .await
                .unwrap();
        }
    }
}

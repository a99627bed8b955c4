//! Application configuration management.

use serde::Deserialize;

use crate::types::Locale;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// REST API configuration.
    pub api: ApiConfig,
    /// Fetch cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// REST API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the AgencyHub REST API (e.g. `https://app.example.com/api`).
    pub base_url: String,
    /// Bearer token sent with every request.
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retries after the first attempt for transport errors and 5xx responses.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before the first retry; grows linearly per attempt.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    250
}

/// Fetch cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached responses.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Seconds before a cached response is considered stale.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_max_capacity() -> u64 {
    100
}

fn default_ttl_secs() -> u64 {
    300 // 5 minutes
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Locale for month labels.
    #[serde(default)]
    pub locale: Locale,
    /// Period token used when none is given.
    #[serde(default = "default_period")]
    pub default_period: String,
}

fn default_period() -> String {
    "current_month".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_period: default_period(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `AGENCYHUB__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("AGENCYHUB").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment_with_defaults() {
        temp_env::with_vars(
            [
                ("AGENCYHUB__API__BASE_URL", Some("http://localhost:3000/api")),
                ("AGENCYHUB__API__TOKEN", None),
                ("AGENCYHUB__CACHE__TTL_SECS", None),
                ("RUN_MODE", Some("test-no-such-file")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.api.base_url, "http://localhost:3000/api");
                assert!(config.api.token.is_none());
                assert_eq!(config.api.timeout_secs, 30);
                assert_eq!(config.api.max_retries, 2);
                assert_eq!(config.cache.max_capacity, 100);
                assert_eq!(config.cache.ttl_secs, 300);
                assert_eq!(config.report.locale, Locale::En);
                assert_eq!(config.report.default_period, "current_month");
            },
        );
    }

    #[test]
    fn test_load_overrides_from_environment() {
        temp_env::with_vars(
            [
                ("AGENCYHUB__API__BASE_URL", Some("https://hub.example.com/api")),
                ("AGENCYHUB__API__TOKEN", Some("secret")),
                ("AGENCYHUB__CACHE__TTL_SECS", Some("60")),
                ("RUN_MODE", Some("test-no-such-file")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.api.token.as_deref(), Some("secret"));
                assert_eq!(config.cache.ttl_secs, 60);
            },
        );
    }

    #[test]
    fn test_load_fails_without_base_url() {
        temp_env::with_vars(
            [
                ("AGENCYHUB__API__BASE_URL", None::<&str>),
                ("RUN_MODE", Some("test-no-such-file")),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }

    #[test]
    fn test_report_config_deserializes_locale() {
        let config: ReportConfig =
            serde_json::from_str(r#"{"locale": "pt-BR", "default_period": "6months"}"#).unwrap();
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.default_period, "6months");
    }
}

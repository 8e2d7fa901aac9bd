//! Process-wide configuration resolved once at startup

use crate::error::{CoreError, CoreResult, ErrorContext};
use std::time::Duration;

/// Environment variable names read at build time by the frontend
pub struct EnvKeys;

impl EnvKeys {
    pub const APP_NAME: &'static str = "APP_NAME";
    pub const API_URL: &'static str = "API_URL";
    pub const IS_PROD: &'static str = "IS_PROD";
}

pub const DEFAULT_APP_NAME: &str = "Backoffice";

/// Static descriptor consumed by the HTTP client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub auth_header: &'static str,
    pub auth_scheme: &'static str,
    pub content_type_json: &'static str,
    pub content_type_multipart: &'static str,
}

impl ApiConfig {
    pub const TIMEOUT_MS: u64 = 15_000;
    pub const AUTH_HEADER: &'static str = "Authorization";
    pub const AUTH_SCHEME: &'static str = "Bearer";
    pub const CONTENT_TYPE_JSON: &'static str = "application/json";
    pub const CONTENT_TYPE_MULTIPART: &'static str = "multipart/form-data";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: Self::TIMEOUT_MS,
            auth_header: Self::AUTH_HEADER,
            auth_scheme: Self::AUTH_SCHEME,
            content_type_json: Self::CONTENT_TYPE_JSON,
            content_type_multipart: Self::CONTENT_TYPE_MULTIPART,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Header value for an authenticated request, e.g. `Bearer abc`
    pub fn authorization_value(&self, token: &str) -> String {
        format!("{} {}", self.auth_scheme, token)
    }
}

/// Environment inputs of the application
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppEnv {
    pub app_name: String,
    /// Empty means requests are relative to the page origin
    pub api_url: String,
    /// `None` when the flag was not provided
    pub production: Option<bool>,
}

impl AppEnv {
    /// Build from a key lookup (environment, `option_env!` table, test map)
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_name = lookup(EnvKeys::APP_NAME)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let api_url = lookup(EnvKeys::API_URL).unwrap_or_default();
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        if !api_url.is_empty() {
            validators::validate_url(&api_url, EnvKeys::API_URL)?;
        }

        let production = lookup(EnvKeys::IS_PROD)
            .map(|flag| validators::parse_flag(&flag, EnvKeys::IS_PROD))
            .transpose()?;

        Ok(Self {
            app_name,
            api_url,
            production,
        })
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api_url.clone())
    }
}

/// Crash-reporting bootstrap settings. The reporting SDK itself is external.
#[derive(Clone, Debug, PartialEq)]
pub struct CrashReportingConfig {
    pub dsn: String,
    pub traces_sample_rate: f64,
    pub environment: String,
}

impl CrashReportingConfig {
    pub const DSN: &'static str =
        "https://966db2db179c4c8ca45de91d49b08b34@o880021.ingest.sentry.io/4504536592285696";
    pub const TRACES_SAMPLE_RATE: f64 = 1.0;

    pub fn for_env(env: &AppEnv) -> Self {
        Self {
            dsn: Self::DSN.to_string(),
            traces_sample_rate: Self::TRACES_SAMPLE_RATE,
            environment: match env.production {
                Some(true) => "production",
                Some(false) => "development",
                None => "unknown",
            }
            .to_string(),
        }
    }

    /// Reporting starts only when the production flag is explicitly `false`.
    ///
    /// This keeps the shipped behaviour: non-production builds report,
    /// production builds and builds without the flag do not.
    pub fn should_initialize(env: &AppEnv) -> bool {
        env.production == Some(false)
    }

    /// Host part of the DSN, safe to log
    pub fn ingest_host(&self) -> Option<String> {
        url::Url::parse(&self.dsn)
            .ok()
            .and_then(|dsn| dsn.host_str().map(str::to_string))
    }

    /// Whether an event drawn with `roll` in `[0, 1)` is kept
    pub fn sampled(&self, roll: f64) -> bool {
        roll < self.traces_sample_rate
    }
}

/// Common validation helpers
pub mod validators {
    use super::*;

    /// Validate URL format
    pub fn validate_url(url: &str, field: &str) -> CoreResult<()> {
        url::Url::parse(url)
            .with_context(|| format!("{field}: invalid URL"))
            .map_err(CoreError::invalid_config)?;
        Ok(())
    }

    /// Accept exactly `"true"` or `"false"`
    pub fn parse_flag(value: &str, field: &str) -> CoreResult<bool> {
        match value.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(CoreError::invalid_config(format!(
                "{field}: expected 'true' or 'false', got '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> CoreResult<AppEnv> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppEnv::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_api_config_constants() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(config.timeout(), Duration::from_millis(15_000));
        assert_eq!(config.auth_header, "Authorization");
        assert_eq!(config.authorization_value("tok"), "Bearer tok");
        assert_eq!(config.content_type_json, "application/json");
        assert_eq!(config.content_type_multipart, "multipart/form-data");
    }

    #[test]
    fn test_env_defaults() {
        let env = env(&[]).unwrap();
        assert_eq!(env.app_name, DEFAULT_APP_NAME);
        assert_eq!(env.api_url, "");
        assert_eq!(env.production, None);
    }

    #[test]
    fn test_env_parses_values() {
        let env = env(&[
            ("APP_NAME", "Acme Admin"),
            ("API_URL", "https://api.acme.test/"),
            ("IS_PROD", "true"),
        ])
        .unwrap();
        assert_eq!(env.app_name, "Acme Admin");
        assert_eq!(env.api_url, "https://api.acme.test");
        assert_eq!(env.production, Some(true));
        assert_eq!(env.api_config().base_url, "https://api.acme.test");
    }

    #[test]
    fn test_env_rejects_bad_flag_and_url() {
        assert!(matches!(
            env(&[("IS_PROD", "yes")]),
            Err(CoreError::InvalidConfig { .. })
        ));
        assert!(matches!(
            env(&[("API_URL", "not a url")]),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_reporting_enabled_only_when_flag_is_false() {
        assert!(CrashReportingConfig::should_initialize(
            &env(&[("IS_PROD", "false")]).unwrap()
        ));
        assert!(!CrashReportingConfig::should_initialize(
            &env(&[("IS_PROD", "true")]).unwrap()
        ));
        assert!(!CrashReportingConfig::should_initialize(&env(&[]).unwrap()));
    }

    #[test]
    fn test_reporting_config() {
        let config = CrashReportingConfig::for_env(&env(&[("IS_PROD", "false")]).unwrap());
        assert_eq!(config.environment, "development");
        assert_eq!(config.ingest_host().as_deref(), Some("o880021.ingest.sentry.io"));
        assert!(config.sampled(0.999));
    }
}

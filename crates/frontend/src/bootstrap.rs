//! One-time startup, run from `main` before the first render

use crate::services::AppServices;
use crate::session::BrowserSession;
use crate::{browser, crash_reporting, logging};
use backoffice_core::config::EnvKeys;
use backoffice_core::{AppEnv, CoreError, routes};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("API client: {0}")]
    Client(#[from] backoffice_http::ClientError),

    #[error("No API URL configured and the page origin is unavailable")]
    MissingApiUrl,
}

/// Values baked in at build time
fn build_env(key: &str) -> Option<String> {
    match key {
        EnvKeys::APP_NAME => option_env!("APP_NAME"),
        EnvKeys::API_URL => option_env!("API_URL"),
        EnvKeys::IS_PROD => option_env!("IS_PROD"),
        _ => None,
    }
    .map(str::to_string)
}

/// Logging, environment, crash reporting, browser detection, session and
/// API configuration, in that order.
pub fn bootstrap() -> Result<AppServices, BootstrapError> {
    let env = AppEnv::from_lookup(build_env);
    logging::init(logging::level_for(
        env.as_ref().ok().and_then(|env| env.production),
    ));
    let env = env?;
    tracing::info!(app = %env.app_name, production = ?env.production, "Starting dashboard");

    routes::validate_tables()?;

    let crash_reporting = crash_reporting::init(&env);
    let engine = browser::detect_engine();
    let session = BrowserSession::new(browser::protocol());

    let mut api = env.api_config();
    if api.base_url.is_empty() {
        api.base_url = browser::origin().ok_or(BootstrapError::MissingApiUrl)?;
    }
    tracing::debug!(base_url = %api.base_url, timeout_ms = api.timeout_ms, "API configured");

    Ok(AppServices::new(env, api, session, engine, crash_reporting)?)
}

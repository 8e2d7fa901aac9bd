//! Panic reporting

use backoffice_core::{AppEnv, CrashReportingConfig};
use std::panic;

/// Install the panic hook and return the reporting settings, if any.
///
/// Panics always reach the browser console. They are also reported as
/// `crash_report` events when [`CrashReportingConfig::should_initialize`] holds,
/// which is the case only for builds with `IS_PROD=false`.
pub fn init(env: &AppEnv) -> Option<CrashReportingConfig> {
    if !CrashReportingConfig::should_initialize(env) {
        console_error_panic_hook::set_once();
        tracing::info!(production = ?env.production, "Crash reporting disabled");
        return None;
    }

    let config = CrashReportingConfig::for_env(env);
    tracing::warn!(
        environment = %config.environment,
        ingest = config.ingest_host().as_deref().unwrap_or("unknown"),
        "Crash reporting enabled for a non-production build"
    );

    let reporting = config.clone();
    panic::set_hook(Box::new(move |info| {
        console_error_panic_hook::hook(info);
        let sampled = reporting.sampled(js_sys::Math::random());
        if sampled {
            tracing::error!(
                target: "crash_report",
                environment = %reporting.environment,
                sample_rate = reporting.traces_sample_rate,
                panic = %info,
                "Unhandled panic"
            );
        }
    }));

    Some(config)
}

//! Browser console logging

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Install the global subscriber. Calling it twice keeps the first one.
pub fn init(level: Level) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .with(LevelFilter::from_level(level))
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }
}

/// Verbose logs everywhere except explicit production builds
pub const fn level_for(production: Option<bool>) -> Level {
    match production {
        Some(true) => Level::INFO,
        _ => Level::DEBUG,
    }
}

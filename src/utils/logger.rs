use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber once per process
///
/// The level comes from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`) and defaults to `INFO`.
/// Later calls are no-ops, as is the first call when another subscriber
/// is already installed.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from_env();
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

fn log_level_from_env() -> Level {
    let log_level = env::var("LOGLEVEL")
        .unwrap_or_else(|_| "INFO".to_string())
        .to_uppercase();

    match log_level.as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

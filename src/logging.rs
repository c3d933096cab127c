use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming a log file; wins over the config file.
pub const LOG_ENV_VAR: &str = "NEXUS_LOG";

/// Resolves the log file base path: `override_path`, then `NEXUS_LOG`,
/// then `[logging] file`.
pub fn log_target(config: &LoggingConfig, override_path: Option<&Path>) -> Option<PathBuf> {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_ENV_VAR).map(PathBuf::from))
        .or_else(|| config.file.clone())
}

/// Initialize tracing with file output.
///
/// Stdout belongs to the TUI, so nothing is installed unless a log file is
/// configured. Files get a `.{timestamp}.{pid}` suffix so concurrent
/// instances never share one.
pub fn init_tracing(config: &LoggingConfig, override_path: Option<&Path>) {
    let Some(log_path) = log_target(config, override_path) else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path.display(), timestamp, pid);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

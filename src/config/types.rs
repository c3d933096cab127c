use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::navigation::Route;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Screen shown at startup. Must be a form screen (default: sign_in).
    #[serde(default)]
    pub start_screen: Route,
    /// Ticks a success notice stays in the header (default: 12).
    #[serde(default = "default_notice_ticks")]
    pub notice_ticks: u32,
}

/// Where browse-screen records come from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in sample catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Diagnostic log output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (default: info).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Logging stays off when unset and `NEXUS_LOG` is absent.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notice_ticks() -> u32 {
    12
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_screen: Route::default(),
            notice_ticks: default_notice_ticks(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

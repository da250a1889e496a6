//! Settings sections.

use serde::{Deserialize, Serialize};

/// Largest `maxDepth` a caller may request.
pub const MAX_DEPTH_LIMIT: usize = 10;

/// Limits and defaults for browser scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Global cap on items emitted by one scan.
    /// Default: 1000
    #[serde(default = "BrowserSettings::default_max_items")]
    pub max_items: usize,

    /// Recursion depth when the caller omits `maxDepth`.
    /// Default: 2
    #[serde(default = "BrowserSettings::default_max_depth")]
    pub default_max_depth: usize,

    /// Category read when the caller omits `category`.
    /// Default: user_library
    #[serde(default = "BrowserSettings::default_category")]
    pub default_category: String,
}

impl BrowserSettings {
    fn default_max_items() -> usize {
        1000
    }

    fn default_max_depth() -> usize {
        2
    }

    fn default_category() -> String {
        "user_library".to_string()
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            max_items: Self::default_max_items(),
            default_max_depth: Self::default_max_depth(),
            default_category: Self::default_category(),
        }
    }
}

/// Log filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive (trace, debug, info, warn, error, or per-target).
    /// Default: info
    #[serde(default = "TelemetryConfig::default_log_level")]
    pub log_level: String,
}

impl TelemetryConfig {
    fn default_log_level() -> String {
        "info".to_string()
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
        }
    }
}

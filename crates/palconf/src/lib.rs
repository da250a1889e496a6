//! Configuration loading for Producer Pal.
//!
//! Two small sections:
//!
//! - **Browser** (`BrowserSettings`): scan limits and defaults for the
//!   browser tools.
//! - **Telemetry** (`TelemetryConfig`): log filtering.
//!
//! # Config File Locations
//!
//! Files are loaded in order (later wins):
//! 1. `/etc/producer-pal/config.toml` (system)
//! 2. `~/.config/producer-pal/config.toml` (user)
//! 3. `./producer-pal.toml` (local override, or the `--config` path)
//! 4. Environment variables (`PRODUCER_PAL_*`, `RUST_LOG`)
//!
//! # Example Config
//!
//! ```toml
//! [browser]
//! max_items = 1000
//! default_max_depth = 2
//! default_category = "user_library"
//!
//! [telemetry]
//! log_level = "info"
//! ```

pub mod loader;
pub mod settings;

pub use loader::{discover_config_files_with_override, ConfigSources};
pub use settings::{BrowserSettings, TelemetryConfig, MAX_DEPTH_LIMIT};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid config value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Complete Producer Pal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PalConfig {
    #[serde(default)]
    pub browser: BrowserSettings,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl PalConfig {
    /// Load configuration from all sources.
    pub fn load() -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(None)?;
        Ok(config)
    }

    /// Load configuration, letting `config_path` stand in for the local
    /// `./producer-pal.toml` override.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(config_path)?;
        Ok(config)
    }

    /// Load configuration from optional path and report where values came from.
    pub fn load_with_sources_from(
        config_path: Option<&Path>,
    ) -> Result<(Self, ConfigSources), ConfigError> {
        let mut sources = ConfigSources::default();
        let mut config = PalConfig::default();

        for path in loader::discover_config_files_with_override(config_path) {
            loader::apply_file(&mut config, &path)?;
            sources.files.push(path);
        }

        loader::apply_env_overrides(&mut config, &mut sources);
        config.validate()?;

        Ok((config, sources))
    }

    /// Reject values the browser tools cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.browser.max_items == 0 {
            return Err(ConfigError::Invalid {
                key: "browser.max_items".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.browser.default_max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Invalid {
                key: "browser.default_max_depth".to_string(),
                message: format!("must be between 0 and {}", MAX_DEPTH_LIMIT),
            });
        }
        Ok(())
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# Producer Pal Configuration\n\n");

        output.push_str("[browser]\n");
        output.push_str(&format!("max_items = {}\n", self.browser.max_items));
        output.push_str(&format!(
            "default_max_depth = {}\n",
            self.browser.default_max_depth
        ));
        output.push_str(&format!(
            "default_category = \"{}\"\n",
            self.browser.default_category
        ));

        output.push_str("\n[telemetry]\n");
        output.push_str(&format!("log_level = \"{}\"\n", self.telemetry.log_level));

        output
    }
}

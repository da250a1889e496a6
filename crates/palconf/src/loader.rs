//! Config file discovery, loading, and environment variable overlay.

use crate::{ConfigError, PalConfig};
use std::env;
use std::path::{Path, PathBuf};

const SYSTEM_CONFIG: &str = "/etc/producer-pal/config.toml";

/// Information about where config values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config files that were loaded (in order)
    pub files: Vec<PathBuf>,
    /// Environment variables that overrode config values
    pub env_overrides: Vec<String>,
}

/// Existing config files in load order: system, user, then local.
///
/// `cli_path` stands in for `./producer-pal.toml` when it exists.
pub fn discover_config_files_with_override(cli_path: Option<&Path>) -> Vec<PathBuf> {
    let user = directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("producer-pal").join("config.toml"));
    let local = match cli_path {
        Some(path) if path.exists() => path.to_path_buf(),
        _ => PathBuf::from("producer-pal.toml"),
    };

    [Some(PathBuf::from(SYSTEM_CONFIG)), user, Some(local)]
        .into_iter()
        .flatten()
        .filter(|path| path.exists())
        .collect()
}

/// Read a TOML file and lay its values over `config`.
pub fn apply_file(config: &mut PalConfig, path: &Path) -> Result<(), ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    apply_toml(config, &contents, path)
}

/// Lay the keys present in `contents` over `config`. Absent keys keep
/// whatever an earlier layer set.
fn apply_toml(config: &mut PalConfig, contents: &str, path: &Path) -> Result<(), ConfigError> {
    let table: toml::Table = contents.parse().map_err(|e: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let bad_value = |key: &str, expected: &str| ConfigError::Parse {
        path: path.to_path_buf(),
        message: format!("{} must be {}", key, expected),
    };

    if let Some(browser) = table.get("browser").and_then(|v| v.as_table()) {
        if let Some(v) = browser.get("max_items") {
            config.browser.max_items = v
                .as_integer()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| bad_value("browser.max_items", "a non-negative integer"))?;
        }
        if let Some(v) = browser.get("default_max_depth") {
            config.browser.default_max_depth = v
                .as_integer()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| bad_value("browser.default_max_depth", "a non-negative integer"))?;
        }
        if let Some(v) = browser.get("default_category") {
            config.browser.default_category = v
                .as_str()
                .ok_or_else(|| bad_value("browser.default_category", "a string"))?
                .to_string();
        }
    }

    if let Some(telemetry) = table.get("telemetry").and_then(|v| v.as_table()) {
        if let Some(v) = telemetry.get("log_level").and_then(|v| v.as_str()) {
            config.telemetry.log_level = v.to_string();
        }
    }

    Ok(())
}

/// Apply environment variable overrides to config.
pub fn apply_env_overrides(config: &mut PalConfig, sources: &mut ConfigSources) {
    apply_overrides_from(config, sources, |key| env::var(key).ok());
}

/// Apply overrides using `lookup` in place of the process environment.
pub fn apply_overrides_from<F>(config: &mut PalConfig, sources: &mut ConfigSources, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("PRODUCER_PAL_MAX_ITEMS") {
        if let Ok(n) = v.trim().parse() {
            config.browser.max_items = n;
            sources.env_overrides.push("PRODUCER_PAL_MAX_ITEMS".to_string());
        }
    }
    if let Some(v) = lookup("PRODUCER_PAL_MAX_DEPTH") {
        if let Ok(n) = v.trim().parse() {
            config.browser.default_max_depth = n;
            sources.env_overrides.push("PRODUCER_PAL_MAX_DEPTH".to_string());
        }
    }
    if let Some(v) = lookup("PRODUCER_PAL_CATEGORY") {
        config.browser.default_category = v;
        sources.env_overrides.push("PRODUCER_PAL_CATEGORY".to_string());
    }

    if let Some(v) = lookup("PRODUCER_PAL_LOG_LEVEL") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("PRODUCER_PAL_LOG_LEVEL".to_string());
    }
    // RUST_LOG wins over everything
    if let Some(v) = lookup("RUST_LOG") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("RUST_LOG".to_string());
    }
}

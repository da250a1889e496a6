//! `ppal-read-browser`: list items from the Live browser.

use lom::LiveApi;
use palconf::{BrowserSettings, MAX_DEPTH_LIMIT};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{args, Outcome};
use crate::browser::{self, path_segments, BrowserItemInfo, Category, ScanOptions};
use crate::error::BrowserError;

/// Request to list browser items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadBrowserRequest {
    #[schemars(description = "browser category (defaults to user_library)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[schemars(description = "path within category (e.g., 'Drums/Acoustic')")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[schemars(description = "case-insensitive name filter")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[schemars(schema_with = "args::depth_schema")]
    #[serde(
        default,
        deserialize_with = "args::opt_depth",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_depth: Option<usize>,
}

/// Browser listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadBrowserResponse {
    /// Category name, with `/path` appended when a path was given. A path
    /// with no segments (`""`, `"/"`, `"//"`) counts as no path and adds no
    /// suffix.
    pub category: String,
    pub items: Vec<BrowserItemInfo>,
    /// True when the scan stopped at the item cap.
    pub limit_reached: bool,
}

/// List items under a category, optionally below a path, filtered by name.
///
/// Depths above [`MAX_DEPTH_LIMIT`] are clamped to it.
#[tracing::instrument(
    name = "tool.read_browser",
    skip(host, settings, request),
    fields(
        browser.category = ?request.category,
        browser.path = ?request.path,
        browser.search = ?request.search,
        browser.max_depth = ?request.max_depth,
    )
)]
pub fn read_browser<H: LiveApi + ?Sized>(
    host: &H,
    settings: &BrowserSettings,
    request: ReadBrowserRequest,
) -> Result<Outcome<ReadBrowserResponse>, BrowserError> {
    let browser = browser::open_browser(host)?;

    let category = match request.category {
        Some(category) => category.as_str().to_string(),
        None => settings.default_category.clone(),
    };

    let root = browser
        .get_property(&category)
        .as_item()
        .cloned()
        .ok_or_else(|| BrowserError::CategoryNotFound(category.clone()))?;

    let path = request
        .path
        .as_deref()
        .filter(|p| path_segments(p).next().is_some());
    let start = match path {
        Some(path) => browser::navigate(root, path)?,
        None => root,
    };

    let options = ScanOptions {
        search: request.search.clone(),
        max_depth: request
            .max_depth
            .unwrap_or(settings.default_max_depth)
            .min(MAX_DEPTH_LIMIT),
        max_items: settings.max_items,
    };
    let result = browser::scan(start.as_ref(), &options);

    let mut warnings = Vec::new();
    if result.capped {
        let message = format!(
            "Stopped scanning browser at {} items. Use search or path to narrow results.",
            settings.max_items
        );
        warn!("{}", message);
        warnings.push(message);
    }

    let echo = match path {
        Some(path) => format!("{}/{}", category, path),
        None => category,
    };
    info!(items = result.items.len(), limit_reached = result.capped, "read browser");

    Ok(Outcome {
        value: ReadBrowserResponse {
            category: echo,
            items: result.items,
            limit_reached: result.capped,
        },
        warnings,
    })
}

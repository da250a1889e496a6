//! `ppal-load-item`: load a browser item into the live set.

use lom::{BrowserItem, LiveApi, Value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{args, Outcome};
use crate::browser::{self, find_item_by_uri};
use crate::error::BrowserError;
use crate::target::{self, InsertPosition};

/// Request to load a browser item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadItemRequest {
    #[schemars(description = "browser item URI from ppal-read-browser")]
    pub uri: String,

    #[schemars(schema_with = "args::track_id_schema")]
    #[serde(
        default,
        deserialize_with = "args::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub track_id: Option<String>,

    #[schemars(description = "where to load device (before/after selected, or replace it)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<InsertPosition>,
}

impl LoadItemRequest {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            track_id: None,
            position: None,
        }
    }

    pub fn with_track(mut self, track_id: impl Into<String>) -> Self {
        self.track_id = Some(track_id.into());
        self
    }

    pub fn with_position(mut self, position: InsertPosition) -> Self {
        self.position = Some(position);
        self
    }
}

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadItemResponse {
    pub loaded: bool,
    pub uri: String,
    pub track_id: String,
    pub message: String,
}

/// Resolve `request.uri`, validate it and its target track, prepare the
/// device chain, then issue the single `load_item` call.
#[tracing::instrument(
    name = "tool.load_item",
    skip(host, request),
    fields(
        item.uri = %request.uri,
        track.id = ?request.track_id,
        load.position = ?request.position,
    )
)]
pub fn load_item<H: LiveApi + ?Sized>(
    host: &H,
    request: LoadItemRequest,
) -> Result<Outcome<LoadItemResponse>, BrowserError> {
    let browser = browser::open_browser(host)?;

    let item = find_item_by_uri(browser.as_ref(), &request.uri)
        .ok_or_else(|| BrowserError::ItemNotFound(request.uri.clone()))?;

    if !item.is_loadable() {
        return Err(BrowserError::ItemNotLoadable(item.name().to_string()));
    }

    let target = target::resolve_track(host, request.track_id.as_deref())?;
    // the load primitive lands on the selected track, so it must exist even
    // when the caller named a different one
    if request.track_id.is_some() {
        target::resolve_track(host, None)?;
    }

    let mut warnings = Vec::new();
    if item.is_device() {
        let placement = target::prepare_device_chain(host, target.track.as_ref(), request.position)?;
        warnings.extend(placement.warnings);
    } else if let Some(position) = request.position {
        debug!(?position, "position ignored for non-device item");
    }

    let name = item.name().to_string();
    browser.call("load_item", &[Value::Item(item)])?;
    info!(item.name = name.as_str(), track.id = target.id.as_str(), "loaded browser item");

    Ok(Outcome {
        value: LoadItemResponse {
            loaded: true,
            uri: request.uri,
            track_id: target.id,
            message: format!("Loaded {}", name),
        },
        warnings,
    })
}

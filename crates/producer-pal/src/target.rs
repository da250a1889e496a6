//! Destination track resolution and device-chain placement.

use lom::{LiveApi, LiveObject, LiveRef, Value, VIEW_PATH};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::BrowserError;

/// Warning emitted when `before` cannot be honoured.
pub const BEFORE_UNSUPPORTED: &str =
    "before/after positioning not directly supported; item will be appended to device chain";

/// Where a device goes relative to the track's selected device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InsertPosition {
    Before,
    After,
    Replace,
}

/// A track that exists in the host.
pub struct TrackTarget<'h> {
    /// Identifier as the caller gave it, or the selected track's `id N`.
    pub id: String,
    pub track: Box<dyn LiveObject + 'h>,
}

impl std::fmt::Debug for TrackTarget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackTarget")
            .field("id", &self.id)
            .field("path", &self.track.path())
            .finish()
    }
}

/// Resolve the track to load into: `requested` when given, otherwise the
/// view's selected track.
pub fn resolve_track<'h, H: LiveApi + ?Sized>(
    host: &'h H,
    requested: Option<&str>,
) -> Result<TrackTarget<'h>, BrowserError> {
    let (id, live_ref) = match requested.map(str::trim).filter(|s| !s.is_empty()) {
        Some(id) => (id.to_string(), LiveRef::parse(id)),
        None => {
            let view = host.resolve(VIEW_PATH);
            let selected = view
                .get_property("selected_track")
                .as_live_ref()
                .ok_or_else(|| BrowserError::TrackNotFound("(none)".to_string()))?;
            (selected.to_string(), selected)
        }
    };

    let track = host.get(&live_ref);
    if !track.exists() {
        return Err(BrowserError::TrackNotFound(id));
    }

    debug!(track.id = id.as_str(), track.path = %track.path(), "resolved target track");
    Ok(TrackTarget { id, track })
}

/// What was done to the chain ahead of loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    /// Chain index of a device deleted so the load replaces it.
    pub replaced: Option<usize>,
    pub warnings: Vec<String>,
}

/// Prepare the device chain of `track` for a device load at `position`.
///
/// Only acts when the track has a selected device: `replace` deletes it,
/// `before` falls back to appending with a warning, `after` appends.
pub fn prepare_device_chain<H: LiveApi + ?Sized>(
    host: &H,
    track: &dyn LiveObject,
    position: Option<InsertPosition>,
) -> Result<Placement, BrowserError> {
    let mut placement = Placement::default();
    let Some(position) = position else {
        return Ok(placement);
    };

    let Some(selected) = track.get_property("view.selected_device").as_live_ref() else {
        debug!(?position, "no selected device, appending");
        return Ok(placement);
    };

    let device = host.get(&selected);
    let Some(index) = device.device_index() else {
        debug!(?position, device = %selected, "selected device has no chain index, appending");
        return Ok(placement);
    };

    match position {
        InsertPosition::Replace => {
            device.call("canonical_parent.delete_device", &[Value::Int(index as i64)])?;
            debug!(index, "deleted selected device for replacement");
            placement.replaced = Some(index);
        }
        InsertPosition::Before => {
            warn!("{}", BEFORE_UNSUPPORTED);
            placement.warnings.push(BEFORE_UNSUPPORTED.to_string());
        }
        InsertPosition::After => {}
    }

    Ok(placement)
}

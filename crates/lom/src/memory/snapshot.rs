//! JSON snapshot of a live set, for offline runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::item::MemoryItem;

/// Serialized form of a [`crate::MemoryHost`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostSnapshot {
    /// False simulates a Live version without a browser object.
    #[serde(default = "default_true")]
    pub browser_available: bool,

    /// Category roots keyed by property name (`drums`, `user_library`, ...).
    #[serde(default)]
    pub categories: BTreeMap<String, ItemSnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_libraries: Option<Vec<ItemSnapshot>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_folders: Option<Vec<ItemSnapshot>>,

    #[serde(default)]
    pub tracks: Vec<TrackSnapshot>,

    /// Index into `tracks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_track: Option<usize>,
}

fn default_true() -> bool {
    true
}

/// One browser node and its subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub is_folder: bool,
    #[serde(default)]
    pub is_loadable: bool,
    #[serde(default)]
    pub is_device: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ItemSnapshot>,
}

impl From<ItemSnapshot> for MemoryItem {
    fn from(snapshot: ItemSnapshot) -> Self {
        Self {
            name: snapshot.name,
            uri: snapshot.uri,
            is_folder: snapshot.is_folder,
            is_loadable: snapshot.is_loadable,
            is_device: snapshot.is_device,
            children: snapshot
                .children
                .into_iter()
                .map(|c| std::rc::Rc::new(MemoryItem::from(c)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSnapshot {
    pub name: String,
    #[serde(default)]
    pub devices: Vec<DeviceSnapshot>,
    /// Index into `devices`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_device: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub name: String,
}

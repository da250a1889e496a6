//! In-memory live set.
//!
//! Answers the same paths, ids, properties and methods the host bridge
//! does for browsing and loading, and journals every mutation so callers
//! can check exactly what happened.

mod item;
mod snapshot;

pub use item::MemoryItem;
pub use snapshot::{DeviceSnapshot, HostSnapshot, ItemSnapshot, TrackSnapshot};

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use crate::error::LomError;
use crate::item::{BrowserItem, ItemRef};
use crate::object::{LiveApi, LiveObject};
use crate::reference::LiveRef;
use crate::value::Value;
use crate::{BROWSER_PATH, VIEW_PATH};

/// A mutation applied to the live set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// `browser.load_item` with the item's uri, landing on the selected track.
    LoadItem { uri: String, track: Option<u64> },
    /// `canonical_parent.delete_device` on a device of `track`.
    DeleteDevice { track: u64, index: usize },
}

#[derive(Debug, Default)]
struct Browser {
    categories: BTreeMap<String, ItemRef>,
    legacy_libraries: Option<Vec<ItemRef>>,
    user_folders: Option<Vec<ItemRef>>,
}

#[derive(Debug, Clone)]
struct Device {
    id: u64,
    name: String,
}

#[derive(Debug, Clone)]
struct Track {
    id: u64,
    name: String,
    devices: Vec<Device>,
    selected_device: Option<u64>,
}

#[derive(Debug, Default)]
struct LiveSet {
    tracks: Vec<Track>,
    selected_track: Option<u64>,
    next_id: u64,
}

impl LiveSet {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn track_index(&self, track_id: u64) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == track_id)
    }

    /// (track index, device index) of a device id.
    fn locate_device(&self, device_id: u64) -> Option<(usize, usize)> {
        self.tracks.iter().enumerate().find_map(|(ti, track)| {
            track
                .devices
                .iter()
                .position(|d| d.id == device_id)
                .map(|di| (ti, di))
        })
    }
}

/// What a [`MemoryObject`] is bound to. Ids are re-resolved on every access
/// so deletions are observed.
#[derive(Debug, Clone)]
enum Target {
    Browser,
    View,
    Track(u64),
    Device(u64),
    Missing(String),
}

/// In-memory implementation of [`LiveApi`].
#[derive(Debug)]
pub struct MemoryHost {
    browser: Option<Browser>,
    set: RefCell<LiveSet>,
    journal: RefCell<Vec<HostCall>>,
}

impl MemoryHost {
    pub fn builder() -> MemoryHostBuilder {
        MemoryHostBuilder::default()
    }

    /// Build a host from a deserialized snapshot.
    pub fn from_snapshot(snapshot: HostSnapshot) -> Self {
        let mut builder = MemoryHostBuilder::default();
        if !snapshot.browser_available {
            builder = builder.without_browser();
        }
        for (name, root) in snapshot.categories {
            builder = builder.category(name, MemoryItem::from(root));
        }
        if let Some(libs) = snapshot.legacy_libraries {
            builder = builder.legacy_libraries(libs.into_iter().map(MemoryItem::from).collect());
        }
        if let Some(folders) = snapshot.user_folders {
            builder = builder.user_folders(folders.into_iter().map(MemoryItem::from).collect());
        }
        for track in snapshot.tracks {
            builder = builder.track(track.name);
            for device in track.devices {
                builder = builder.device(device.name);
            }
            if let Some(index) = track.selected_device {
                builder = builder.select_device(index);
            }
        }
        if let Some(index) = snapshot.selected_track {
            builder = builder.select_track(index);
        }
        builder.build()
    }

    /// Parse a JSON [`HostSnapshot`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let snapshot: HostSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Mutations applied so far, oldest first.
    pub fn calls(&self) -> Vec<HostCall> {
        self.journal.borrow().clone()
    }

    /// Device names on the track at `track_index`, in chain order.
    pub fn device_names(&self, track_index: usize) -> Vec<String> {
        self.set
            .borrow()
            .tracks
            .get(track_index)
            .map(|t| t.devices.iter().map(|d| d.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Id of the track at `track_index`.
    pub fn track_id(&self, track_index: usize) -> Option<u64> {
        self.set.borrow().tracks.get(track_index).map(|t| t.id)
    }

    /// Change the view's selected track.
    pub fn select_track(&self, track_index: usize) {
        let mut set = self.set.borrow_mut();
        set.selected_track = set.tracks.get(track_index).map(|t| t.id);
    }

    fn target_for(&self, live_ref: &LiveRef) -> Target {
        let set = self.set.borrow();
        match live_ref {
            LiveRef::Id(id) => {
                if set.track_index(*id).is_some() {
                    Target::Track(*id)
                } else if set.locate_device(*id).is_some() {
                    Target::Device(*id)
                } else {
                    Target::Missing(live_ref.to_string())
                }
            }
            LiveRef::Path(path) => {
                let parts: Vec<&str> = path.split_whitespace().collect();
                let index = |i: usize| parts.get(i).and_then(|p| p.parse::<usize>().ok());
                match parts.as_slice() {
                    ["live_set", "browser"] if self.browser.is_some() => Target::Browser,
                    ["live_set", "view"] => Target::View,
                    ["live_set", "tracks", _] => index(2)
                        .and_then(|t| set.tracks.get(t))
                        .map(|t| Target::Track(t.id))
                        .unwrap_or_else(|| Target::Missing(path.clone())),
                    ["live_set", "tracks", _, "devices", _] => index(2)
                        .and_then(|t| set.tracks.get(t))
                        .and_then(|t| index(4).and_then(|d| t.devices.get(d)))
                        .map(|d| Target::Device(d.id))
                        .unwrap_or_else(|| Target::Missing(path.clone())),
                    _ => Target::Missing(path.clone()),
                }
            }
        }
    }

    fn load_item(&self, item: &ItemRef) -> Result<Value, LomError> {
        let mut set = self.set.borrow_mut();
        let selected = set.selected_track;

        // devices need a destination track; check it before touching anything
        let destination = if item.is_device() {
            let track_id = selected.ok_or_else(|| LomError::ObjectMissing("selected track".to_string()))?;
            let ti = set
                .track_index(track_id)
                .ok_or_else(|| LomError::ObjectMissing(LiveRef::Id(track_id).to_string()))?;
            Some(ti)
        } else {
            None
        };

        self.journal.borrow_mut().push(HostCall::LoadItem {
            uri: item.uri().to_string(),
            track: selected,
        });

        if let Some(ti) = destination {
            let device_id = set.allocate_id();
            let track = &mut set.tracks[ti];
            track.devices.push(Device {
                id: device_id,
                name: item.name().to_string(),
            });
            track.selected_device = Some(device_id);
            debug!(track = track.name.as_str(), device = item.name(), "appended device");
        }
        Ok(Value::Null)
    }

    fn delete_device(&self, device_id: u64, args: &[Value]) -> Result<Value, LomError> {
        let method = "canonical_parent.delete_device";
        let index = match args {
            [Value::Int(n)] if *n >= 0 => *n as usize,
            _ => {
                return Err(LomError::InvalidArguments {
                    method: method.to_string(),
                    message: "expected one non-negative device index".to_string(),
                })
            }
        };

        let mut set = self.set.borrow_mut();
        let (ti, _) = set
            .locate_device(device_id)
            .ok_or_else(|| LomError::ObjectMissing(LiveRef::Id(device_id).to_string()))?;
        let track = &mut set.tracks[ti];
        if index >= track.devices.len() {
            return Err(LomError::InvalidArguments {
                method: method.to_string(),
                message: format!("device index {} out of range", index),
            });
        }

        let removed = track.devices.remove(index);
        if track.selected_device == Some(removed.id) {
            track.selected_device = None;
        }
        self.journal.borrow_mut().push(HostCall::DeleteDevice {
            track: track.id,
            index,
        });
        debug!(track = track.name.as_str(), device = removed.name.as_str(), "deleted device");
        Ok(Value::Null)
    }
}

impl LiveApi for MemoryHost {
    fn get(&self, target: &LiveRef) -> Box<dyn LiveObject + '_> {
        Box::new(MemoryObject {
            host: self,
            target: self.target_for(target),
        })
    }
}

/// Proxy handed out by [`MemoryHost`].
struct MemoryObject<'h> {
    host: &'h MemoryHost,
    target: Target,
}

impl LiveObject for MemoryObject<'_> {
    fn exists(&self) -> bool {
        let set = self.host.set.borrow();
        match &self.target {
            Target::Browser | Target::View => true,
            Target::Track(id) => set.track_index(*id).is_some(),
            Target::Device(id) => set.locate_device(*id).is_some(),
            Target::Missing(_) => false,
        }
    }

    fn path(&self) -> String {
        let set = self.host.set.borrow();
        match &self.target {
            Target::Browser => BROWSER_PATH.to_string(),
            Target::View => VIEW_PATH.to_string(),
            Target::Track(id) => set
                .track_index(*id)
                .map(|ti| format!("live_set tracks {}", ti))
                .unwrap_or_default(),
            Target::Device(id) => set
                .locate_device(*id)
                .map(|(ti, di)| format!("live_set tracks {} devices {}", ti, di))
                .unwrap_or_default(),
            Target::Missing(_) => String::new(),
        }
    }

    fn id(&self) -> Option<u64> {
        match &self.target {
            Target::Track(id) | Target::Device(id) if self.exists() => Some(*id),
            _ => None,
        }
    }

    fn get_property(&self, name: &str) -> Value {
        let set = self.host.set.borrow();
        match &self.target {
            Target::Browser => {
                let Some(browser) = &self.host.browser else {
                    return Value::Null;
                };
                match name {
                    "legacy_libraries" => browser
                        .legacy_libraries
                        .clone()
                        .map(Value::Items)
                        .unwrap_or(Value::Null),
                    "user_folders" => browser
                        .user_folders
                        .clone()
                        .map(Value::Items)
                        .unwrap_or(Value::Null),
                    category => browser
                        .categories
                        .get(category)
                        .cloned()
                        .map(Value::Item)
                        .unwrap_or(Value::Null),
                }
            }
            Target::View => match name {
                "selected_track" => set.selected_track.map(Value::Id).unwrap_or(Value::Null),
                _ => Value::Null,
            },
            Target::Track(id) => {
                let Some(track) = set.track_index(*id).map(|ti| &set.tracks[ti]) else {
                    return Value::Null;
                };
                match name {
                    "name" => Value::Str(track.name.clone()),
                    "view.selected_device" => {
                        track.selected_device.map(Value::Id).unwrap_or(Value::Null)
                    }
                    _ => Value::Null,
                }
            }
            Target::Device(id) => match (name, set.locate_device(*id)) {
                ("name", Some((ti, di))) => Value::Str(set.tracks[ti].devices[di].name.clone()),
                _ => Value::Null,
            },
            Target::Missing(_) => Value::Null,
        }
    }

    fn call(&self, method: &str, args: &[Value]) -> Result<Value, LomError> {
        if !self.exists() {
            let label = match &self.target {
                Target::Missing(label) => label.clone(),
                other => format!("{:?}", other),
            };
            return Err(LomError::ObjectMissing(label));
        }

        match (&self.target, method) {
            (Target::Browser, "load_item") => match args {
                [Value::Item(item)] => self.host.load_item(item),
                _ => Err(LomError::InvalidArguments {
                    method: method.to_string(),
                    message: "expected one browser item".to_string(),
                }),
            },
            (Target::Device(id), "canonical_parent.delete_device") => {
                self.host.delete_device(*id, args)
            }
            _ => Err(LomError::UnknownMethod {
                object: self.path(),
                method: method.to_string(),
            }),
        }
    }
}

/// Builder for [`MemoryHost`]. Device and selection calls apply to the most
/// recently added track.
#[derive(Debug)]
pub struct MemoryHostBuilder {
    browser: Option<Browser>,
    set: LiveSet,
}

impl Default for MemoryHostBuilder {
    fn default() -> Self {
        Self {
            browser: Some(Browser::default()),
            set: LiveSet::default(),
        }
    }
}

impl MemoryHostBuilder {
    /// Simulate a Live version with no browser object.
    pub fn without_browser(mut self) -> Self {
        self.browser = None;
        self
    }

    /// Register a category root under its property name.
    pub fn category(mut self, name: impl Into<String>, root: MemoryItem) -> Self {
        if let Some(browser) = self.browser.as_mut() {
            browser.categories.insert(name.into(), Rc::new(root));
        }
        self
    }

    pub fn legacy_libraries(mut self, libraries: Vec<MemoryItem>) -> Self {
        if let Some(browser) = self.browser.as_mut() {
            browser.legacy_libraries = Some(libraries.into_iter().map(MemoryItem::into_ref).collect());
        }
        self
    }

    pub fn user_folders(mut self, folders: Vec<MemoryItem>) -> Self {
        if let Some(browser) = self.browser.as_mut() {
            browser.user_folders = Some(folders.into_iter().map(MemoryItem::into_ref).collect());
        }
        self
    }

    pub fn track(mut self, name: impl Into<String>) -> Self {
        let id = self.set.allocate_id();
        self.set.tracks.push(Track {
            id,
            name: name.into(),
            devices: Vec::new(),
            selected_device: None,
        });
        self
    }

    /// Append a device to the last track.
    pub fn device(mut self, name: impl Into<String>) -> Self {
        let id = self.set.allocate_id();
        if let Some(track) = self.set.tracks.last_mut() {
            track.devices.push(Device {
                id,
                name: name.into(),
            });
        }
        self
    }

    /// Select the device at `index` on the last track.
    pub fn select_device(mut self, index: usize) -> Self {
        if let Some(track) = self.set.tracks.last_mut() {
            track.selected_device = track.devices.get(index).map(|d| d.id);
        }
        self
    }

    pub fn select_track(mut self, index: usize) -> Self {
        self.set.selected_track = self.set.tracks.get(index).map(|t| t.id);
        self
    }

    pub fn build(self) -> MemoryHost {
        MemoryHost {
            browser: self.browser,
            set: RefCell::new(self.set),
            journal: RefCell::new(Vec::new()),
        }
    }
}

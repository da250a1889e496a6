//! lom - a typed view of the Live Object Model.
//!
//! The host DAW exposes its live set through a proxy that can be pointed at
//! any object by canonical path (`live_set tracks 0`) or by id (`id 12`).
//! This crate turns that proxy into an injectable capability:
//!
//! - [`LiveApi`] resolves a [`LiveRef`] into a [`LiveObject`].
//! - [`LiveObject`] answers `exists`, property reads, and method calls.
//! - [`BrowserItem`] is a node of the content browser tree; its children come
//!   from a single-pass iterator.
//! - [`MemoryHost`] is a complete in-memory live set, built in code or loaded
//!   from a JSON [`HostSnapshot`].
//!
//! ```rust
//! use lom::{LiveApi, LiveRef, MemoryHost};
//!
//! let host = MemoryHost::builder().track("Bass").select_track(0).build();
//! let view = host.get(&LiveRef::path("live_set view"));
//! let selected = view.get_property("selected_track").as_live_ref();
//! assert_eq!(selected, Some(LiveRef::Id(1)));
//! ```

pub mod error;
pub mod item;
pub mod memory;
pub mod object;
pub mod reference;
pub mod value;

pub use error::LomError;
pub use item::{BrowserItem, Children, ItemRef};
pub use memory::{
    DeviceSnapshot, HostCall, HostSnapshot, ItemSnapshot, MemoryHost, MemoryHostBuilder,
    MemoryItem, TrackSnapshot,
};
pub use object::{LiveApi, LiveObject};
pub use reference::LiveRef;
pub use value::Value;

/// Canonical path of the browser object.
pub const BROWSER_PATH: &str = "live_set browser";

/// Canonical path of the song view.
pub const VIEW_PATH: &str = "live_set view";

//! Producer Pal browser tools.
//!
//! Two tools over an injected Live host:
//!
//! - `ppal-read-browser` lists the content browser with a depth bound, a
//!   case-insensitive name filter and a global item cap.
//! - `ppal-load-item` resolves an item by uri and loads it onto a track,
//!   optionally replacing the track's selected device.
//!
//! The host is anything implementing [`lom::LiveApi`]; tests and the CLI use
//! [`lom::MemoryHost`].
//!
//! ```rust
//! use lom::{MemoryHost, MemoryItem};
//! use palconf::BrowserSettings;
//! use producer_pal::PalTools;
//! use serde_json::json;
//!
//! let host = MemoryHost::builder()
//!     .category(
//!         "user_library",
//!         MemoryItem::folder("User Library", "userlibrary:", vec![
//!             MemoryItem::device("Warm Pad", "userlibrary:Warm Pad"),
//!         ]),
//!     )
//!     .build();
//!
//! let tools = PalTools::new(&host, BrowserSettings::default());
//! let out = tools.call_tool("ppal-read-browser", json!({})).unwrap();
//! assert_eq!(out.data["items"][0]["name"], "Warm Pad");
//! ```

pub mod browser;
pub mod error;
pub mod target;
pub mod telemetry;
pub mod tools;

pub use browser::{BrowserItemInfo, Category};
pub use error::BrowserError;
pub use target::InsertPosition;
pub use tools::{
    list_tools, LoadItemRequest, LoadItemResponse, PalTools, ReadBrowserRequest,
    ReadBrowserResponse, ToolAnnotations, ToolDef, ToolError, ToolOutput, ToolResult,
};

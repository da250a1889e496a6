//! Walking the host's content browser.
//!
//! - [`scan`] enumerates a subtree with a depth bound, a name filter and a
//!   global item cap.
//! - [`navigate`] follows a slash-separated path from a category root.
//! - [`find_item_by_uri`] locates a single item anywhere in the browser.

pub mod category;
pub mod path;
pub mod resolve;
pub mod scan;

pub use category::Category;
pub use path::{navigate, path_segments};
pub use resolve::find_item_by_uri;
pub use scan::{scan, BrowserItemInfo, ScanOptions, ScanResult};

use lom::{LiveApi, LiveObject, BROWSER_PATH};

use crate::error::BrowserError;

/// Fetch the browser object, failing when this Live version lacks one.
pub fn open_browser<H: LiveApi + ?Sized>(host: &H) -> Result<Box<dyn LiveObject + '_>, BrowserError> {
    let browser = host.resolve(BROWSER_PATH);
    if !browser.exists() {
        return Err(BrowserError::BrowserUnavailable);
    }
    Ok(browser)
}

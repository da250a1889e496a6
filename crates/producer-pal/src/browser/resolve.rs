//! Locating a browser item by uri.

use lom::{BrowserItem, ItemRef, LiveObject};
use tracing::debug;

use super::category::Category;

/// Search every category, then legacy libraries, then user folders, for the
/// item whose uri equals `uri`. The first match in that order wins.
///
/// Subtrees are walked without a depth bound; the host tree is finite.
pub fn find_item_by_uri(browser: &dyn LiveObject, uri: &str) -> Option<ItemRef> {
    for category in Category::ALL {
        let root = browser.get_property(category.as_str());
        if let Some(found) = root.as_item().and_then(|item| search_item(item, uri)) {
            debug!(category = category.as_str(), uri, "resolved browser item");
            return Some(found);
        }
    }

    for collection in ["legacy_libraries", "user_folders"] {
        let roots = browser.get_property(collection);
        for root in roots.as_items().unwrap_or_default() {
            if let Some(found) = search_item(root, uri) {
                debug!(collection, uri, "resolved browser item");
                return Some(found);
            }
        }
    }

    None
}

fn search_item(item: &ItemRef, uri: &str) -> Option<ItemRef> {
    if item.uri() == uri {
        return Some(ItemRef::clone(item));
    }

    if item.is_folder() {
        for child in item.iter_children() {
            if let Some(found) = search_item(&child, uri) {
                return Some(found);
            }
        }
    }

    None
}

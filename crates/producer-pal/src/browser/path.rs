use lom::{BrowserItem, ItemRef};

use crate::error::BrowserError;

/// Non-empty segments of a slash-separated browser path.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}

/// Walk `path` down from `root`, matching each segment against child names
/// case-insensitively.
pub fn navigate(root: ItemRef, path: &str) -> Result<ItemRef, BrowserError> {
    let mut current = root;
    for segment in path_segments(path) {
        current = find_child_by_name(current.as_ref(), segment).ok_or_else(|| {
            BrowserError::PathSegmentNotFound {
                path: path.to_string(),
                segment: segment.to_string(),
            }
        })?;
    }
    Ok(current)
}

fn find_child_by_name(parent: &dyn BrowserItem, name: &str) -> Option<ItemRef> {
    let wanted = name.to_lowercase();
    parent
        .iter_children()
        .find(|child| child.name().to_lowercase() == wanted)
}

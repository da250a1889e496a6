//! Bounded, filtered enumeration of a browser subtree.
//!
//! Traversal is depth-first and pre-order. Depth 0 is the immediate children
//! of the root handed to [`scan`]; folders are only entered while the current
//! depth is below `max_depth`.
//!
//! With a search term, a folder whose own name does not match is transparent:
//! its matching descendants are appended to the folder's parent list rather
//! than nested under it. A matching folder is emitted and its subtree nests
//! under `children` as usual.

use lom::BrowserItem;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Projection of a browser item returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrowserItemInfo {
    pub name: String,
    pub uri: String,
    pub is_folder: bool,
    pub is_loadable: bool,

    /// Present only when at least one descendant survived filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BrowserItemInfo>>,
}

impl BrowserItemInfo {
    fn project(item: &dyn BrowserItem) -> Self {
        Self {
            name: item.name().to_string(),
            uri: item.uri().to_string(),
            is_folder: item.is_folder(),
            is_loadable: item.is_loadable(),
            children: None,
        }
    }

    /// This item plus all of its descendants.
    pub fn count(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map(|children| children.iter().map(Self::count).sum())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Case-insensitive substring filter on item names.
    pub search: Option<String>,
    pub max_depth: usize,
    /// Cap on items emitted across the whole result tree.
    pub max_items: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            search: None,
            max_depth: 2,
            max_items: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    pub items: Vec<BrowserItemInfo>,
    /// True when the cap stopped the walk early.
    pub capped: bool,
}

/// Running tally handed back up the recursion.
#[derive(Debug, Clone, Copy)]
struct Progress {
    emitted: usize,
    capped: bool,
}

struct Scanner {
    needle: Option<String>,
    max_depth: usize,
    max_items: usize,
}

/// Enumerate the children of `root` according to `options`.
pub fn scan(root: &dyn BrowserItem, options: &ScanOptions) -> ScanResult {
    let scanner = Scanner {
        needle: options
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase),
        max_depth: options.max_depth,
        max_items: options.max_items,
    };

    let mut items = Vec::new();
    let progress = scanner.collect(root, 0, 0, &mut items);
    ScanResult {
        items,
        capped: progress.capped,
    }
}

impl Scanner {
    fn matches(&self, name: &str) -> bool {
        match &self.needle {
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// Append the surviving children of `parent` to `out`. `emitted` is the
    /// number of items already emitted anywhere in the tree.
    fn collect(
        &self,
        parent: &dyn BrowserItem,
        depth: usize,
        mut emitted: usize,
        out: &mut Vec<BrowserItemInfo>,
    ) -> Progress {
        for child in parent.iter_children() {
            if emitted >= self.max_items {
                return Progress {
                    emitted,
                    capped: true,
                };
            }

            let descend = child.is_folder() && depth < self.max_depth;

            if self.matches(child.name()) {
                emitted += 1;
                let mut info = BrowserItemInfo::project(child.as_ref());

                let mut capped = false;
                if descend {
                    let mut nested = Vec::new();
                    let progress = self.collect(child.as_ref(), depth + 1, emitted, &mut nested);
                    emitted = progress.emitted;
                    capped = progress.capped;
                    if !nested.is_empty() {
                        info.children = Some(nested);
                    }
                }

                out.push(info);
                if capped {
                    return Progress { emitted, capped };
                }
            } else if descend {
                // non-matching folder: its matches surface at this level
                let progress = self.collect(child.as_ref(), depth + 1, emitted, out);
                if progress.capped {
                    return progress;
                }
                emitted = progress.emitted;
            }
        }

        Progress {
            emitted,
            capped: false,
        }
    }
}

//! Browser tree nodes.

use std::fmt;
use std::rc::Rc;

/// Shared handle to a browser item owned by the host.
pub type ItemRef = Rc<dyn BrowserItem>;

/// One-shot sequence of child items. Not restartable: call
/// [`BrowserItem::iter_children`] again for a fresh pass.
pub type Children<'a> = Box<dyn Iterator<Item = ItemRef> + 'a>;

/// A node in the host's content browser.
pub trait BrowserItem: fmt::Debug {
    /// Display name.
    fn name(&self) -> &str;

    /// Stable identifier, unique across the whole browser.
    fn uri(&self) -> &str;

    fn is_folder(&self) -> bool;

    /// True for leaves that can be inserted into the live set.
    fn is_loadable(&self) -> bool;

    /// True for device presets (as opposed to samples and clips).
    fn is_device(&self) -> bool;

    /// Produce this item's children.
    fn iter_children(&self) -> Children<'_>;
}

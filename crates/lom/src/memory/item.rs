//! Browser items held in memory.

use std::rc::Rc;

use crate::item::{BrowserItem, Children, ItemRef};

/// A browser node owned by a [`crate::MemoryHost`].
#[derive(Debug, Clone)]
pub struct MemoryItem {
    pub name: String,
    pub uri: String,
    pub is_folder: bool,
    pub is_loadable: bool,
    pub is_device: bool,
    pub children: Vec<Rc<MemoryItem>>,
}

impl MemoryItem {
    /// A folder holding `children`.
    pub fn folder(name: impl Into<String>, uri: impl Into<String>, children: Vec<MemoryItem>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            is_folder: true,
            is_loadable: false,
            is_device: false,
            children: children.into_iter().map(Rc::new).collect(),
        }
    }

    /// A loadable device preset.
    pub fn device(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            is_folder: false,
            is_loadable: true,
            is_device: true,
            children: Vec::new(),
        }
    }

    /// A loadable sample or clip.
    pub fn sample(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            is_folder: false,
            is_loadable: true,
            is_device: false,
            children: Vec::new(),
        }
    }

    /// Override loadability, e.g. for a folder the host reports as loadable.
    pub fn loadable(mut self, loadable: bool) -> Self {
        self.is_loadable = loadable;
        self
    }

    pub fn into_ref(self) -> ItemRef {
        Rc::new(self)
    }
}

impl BrowserItem for MemoryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    fn is_folder(&self) -> bool {
        self.is_folder
    }

    fn is_loadable(&self) -> bool {
        self.is_loadable
    }

    fn is_device(&self) -> bool {
        self.is_device
    }

    fn iter_children(&self) -> Children<'_> {
        Box::new(self.children.iter().map(|child| Rc::clone(child) as ItemRef))
    }
}

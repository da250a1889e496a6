//! Property and argument values crossing the host bridge.

use crate::item::ItemRef;
use crate::reference::LiveRef;

/// A value read from or passed to the host.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    /// Object id, rendered as `id N` by the host.
    Id(u64),
    Item(ItemRef),
    Items(Vec<ItemRef>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&ItemRef> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[ItemRef]> {
        match self {
            Self::Items(items) => Some(items),
            _ => None,
        }
    }

    /// Interpret an id or an id-string as an object reference.
    ///
    /// The host reports "nothing selected" as `id 0`, which maps to `None`.
    pub fn as_live_ref(&self) -> Option<LiveRef> {
        let live_ref = match self {
            Self::Id(id) => LiveRef::Id(*id),
            Self::Str(s) if !s.trim().is_empty() => LiveRef::parse(s),
            _ => return None,
        };
        match live_ref {
            LiveRef::Id(0) => None,
            other => Some(other),
        }
    }
}

impl From<ItemRef> for Value {
    fn from(item: ItemRef) -> Self {
        Self::Item(item)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

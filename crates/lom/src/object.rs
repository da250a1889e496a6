//! The proxy capability and the objects it hands out.

use crate::error::LomError;
use crate::reference::LiveRef;
use crate::value::Value;

/// Entry point into the host. Passed explicitly to whatever needs it.
pub trait LiveApi {
    /// Point a proxy at `target`. Never fails: an unresolvable target yields
    /// an object whose [`LiveObject::exists`] is false.
    fn get(&self, target: &LiveRef) -> Box<dyn LiveObject + '_>;

    /// Parse `s` as an id or path, then [`LiveApi::get`] it.
    fn resolve(&self, s: &str) -> Box<dyn LiveObject + '_> {
        self.get(&LiveRef::parse(s))
    }
}

/// A proxy bound to one object in the live set.
pub trait LiveObject {
    fn exists(&self) -> bool;

    /// Canonical path, or an empty string when the object is gone.
    fn path(&self) -> String;

    fn id(&self) -> Option<u64>;

    /// Read a property; [`Value::Null`] when the host has nothing there.
    fn get_property(&self, name: &str) -> Value;

    /// Invoke a host method. Dotted names address a related object, e.g.
    /// `canonical_parent.delete_device`.
    fn call(&self, method: &str, args: &[Value]) -> Result<Value, LomError>;

    /// Position of this device in its chain, taken from the canonical path.
    fn device_index(&self) -> Option<usize> {
        device_index_in_path(&self.path())
    }
}

/// Trailing `devices N` index of a canonical path.
pub fn device_index_in_path(path: &str) -> Option<usize> {
    let mut parts = path.split_whitespace().rev();
    let index = parts.next()?.parse().ok()?;
    match parts.next() {
        Some("devices") => Some(index),
        _ => None,
    }
}

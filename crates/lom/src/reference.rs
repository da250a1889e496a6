//! Object references: canonical paths and ids.

use std::fmt;

/// How a caller addresses a live object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiveRef {
    /// Numeric object id (`id 12` on the wire).
    Id(u64),
    /// Canonical path such as `live_set tracks 0 devices 1`.
    Path(String),
}

impl LiveRef {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Parse `"id 12"`, `"12"`, or a canonical path.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let id_part = trimmed.strip_prefix("id ").map(str::trim).unwrap_or(trimmed);
        match id_part.parse::<u64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Path(trimmed.to_string()),
        }
    }
}

impl fmt::Display for LiveRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {}", id),
            Self::Path(path) => write!(f, "{}", path),
        }
    }
}

impl From<&str> for LiveRef {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

//! Named failures of the browser tools.

use lom::LomError;
use thiserror::Error;

/// Every way a browse or load can fail. Each aborts the call before any
/// host mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("Browser not available in this Live version")]
    BrowserUnavailable,

    #[error("Browser category \"{0}\" not found")]
    CategoryNotFound(String),

    #[error("Path not found: {path} (stopped at \"{segment}\")")]
    PathSegmentNotFound { path: String, segment: String },

    #[error("Browser item not found: {0}")]
    ItemNotFound(String),

    #[error("Item is not loadable: {0}")]
    ItemNotLoadable(String),

    #[error("Track not found: {0}")]
    TrackNotFound(String),

    #[error("Live API error: {0}")]
    Host(#[from] LomError),
}

impl BrowserError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BrowserUnavailable => "browser_unavailable",
            Self::CategoryNotFound(_) => "category_not_found",
            Self::PathSegmentNotFound { .. } => "path_segment_not_found",
            Self::ItemNotFound(_) => "item_not_found",
            Self::ItemNotLoadable(_) => "item_not_loadable",
            Self::TrackNotFound(_) => "track_not_found",
            Self::Host(_) => "host_error",
        }
    }
}

use thiserror::Error;

/// Failures reported by the host bridge.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LomError {
    #[error("{object} has no method {method}")]
    UnknownMethod { object: String, method: String },

    #[error("invalid arguments for {method}: {message}")]
    InvalidArguments { method: String, message: String },

    #[error("object does not exist: {0}")]
    ObjectMissing(String),
}

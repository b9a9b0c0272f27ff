//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Error produced while fetching users from the remote API.
///
/// None of these reach the user: [`crate::source::load_users`] logs them and
/// resolves to an empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum FetchError {
    /// The configured endpoint is not a valid absolute URL
    #[error("Invalid endpoint '{endpoint}': {detail}")]
    InvalidEndpoint { endpoint: String, detail: String },

    /// Connection refused, DNS failure, TLS failure, ...
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-2xx status
    #[error("Unexpected HTTP status {status}")]
    Status { status: u16, body: String },

    /// The body was not a `{ "results": [...] }` JSON document
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Whether the failure is an environmental condition (offline, slow network)
    /// rather than a broken endpoint or payload.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }
}

/// Error produced by positional list operations.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum StateError {
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    State(#[from] StateError),
}

impl CoreError {
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Fetch(e) => e.is_expected(),
            Self::State(_) => true,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

//! Error types for the Random User API client.
//!
//! # Design
//! Transport and schema failures are never recovered here: one failed request
//! yields one failed operation, with the raw status code and body kept for
//! debugging. An empty `results` list on a single-user fetch gets its own
//! variant because it is a protocol violation by the upstream service, not a
//! status-level failure. Malformed dates inside a user record are *not*
//! errors — the formatter recovers them as the `"Invalid Date"` sentinel.

use std::fmt;

/// Errors returned by `UserClient` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-success status.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected schema.
    Deserialization(String),

    /// A single-user fetch got a payload whose `results` list was empty.
    EmptyResults,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::EmptyResults => write!(f, "response contained no results"),
        }
    }
}

impl std::error::Error for ApiError {}

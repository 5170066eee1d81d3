//! Error types for API, OAuth and webhook calls.

use std::fmt;

use thiserror::Error;

use crate::transport::HttpError;

/// Message used when the remote service does not say what went wrong.
pub const DEFAULT_ERROR_MESSAGE: &str = "Slack Response Error";

/// The remote service accepted the request but reported a failure.
///
/// Built from an `ok: false` API envelope (message taken from its `error`
/// field) or from a webhook reply other than `ok` (message is the reply).
/// The request URL and raw response body are attached for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackError {
    /// Human-readable message
    pub message: String,
    /// URL of the failed request, if known
    pub request_url: Option<String>,
    /// Raw response body, if captured
    pub response_body: Option<String>,
}

impl SlackError {
    /// Creates an error with the given message, or the default message if `None`.
    #[must_use]
    pub fn new(message: Option<String>) -> Self {
        Self {
            message: message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            request_url: None,
            response_body: None,
        }
    }

    /// Attaches the URL of the failed request.
    #[must_use]
    pub fn with_request_url(mut self, url: impl Into<String>) -> Self {
        self.request_url = Some(url.into());
        self
    }

    /// Attaches the raw response body.
    #[must_use]
    pub fn with_response_body(mut self, body: impl Into<String>) -> Self {
        self.response_body = Some(body.into());
        self
    }
}

impl fmt::Display for SlackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SlackError {}

/// Error type for a single client call.
///
/// Transport failures and protocol failures stay distinguishable so callers
/// can pick their own retry policy.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP collaborator failed; propagated unchanged.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The remote service reported a failure.
    #[error(transparent)]
    Protocol(#[from] SlackError),

    /// A method argument cannot be encoded for the chosen channel.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name
        name: String,
        /// Reason it was rejected
        reason: String,
    },

    /// A payload could not be serialized, or a response could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the remote service reported the failure.
    #[must_use]
    pub const fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }

    /// Returns true if the HTTP collaborator failed.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the protocol error, if this is one.
    #[must_use]
    pub const fn as_protocol(&self) -> Option<&SlackError> {
        match self {
            Self::Protocol(e) => Some(e),
            _ => None,
        }
    }
}

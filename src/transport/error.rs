//! Transport failures.

use thiserror::Error;

/// The request never produced a reply body.
///
/// Clients surface these unchanged inside [`Error::Transport`](crate::Error::Transport);
/// whether to retry is the caller's call.
#[derive(Debug, Error)]
pub enum HttpError {
    /// DNS, TLS, refused connections and reads cut short.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport's own timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The base URL does not parse once the method name is appended.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be assembled by the transport.
    #[error("Invalid request body: {0}")]
    Body(String),
}

//! Request shaping and response normalization.
//!
//! This module provides:
//! - Method arguments ([`MethodArgs`], [`ArgValue`])
//! - Per-method request building ([`MethodRequestBuilder`], [`Encoding`])
//! - Request execution for both reply conventions ([`execute_api`], [`execute_webhook`])
//! - Error types ([`Error`], [`SlackError`])

mod args;
mod builder;
mod error;
mod executor;


pub use args::{ArgValue, MethodArgs};
pub use builder::{
    ATTACHMENTS_ARG, CONTENT_ARG, Encoding, FILE_ARG, FILENAME_ARG, MethodRequestBuilder,
    TOKEN_ARG,
};
pub use error::{DEFAULT_ERROR_MESSAGE, Error, SlackError};
pub use executor::{ResponseBody, WEBHOOK_OK, execute_api, execute_webhook};

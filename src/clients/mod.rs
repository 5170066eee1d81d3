//! The three client kinds.
//!
//! - [`ApiClient`]: generic Web API method calls with a bearer token
//! - [`OAuthClient`]: authorization code exchange
//! - [`WebhookClient`]: one-way Incoming Webhook posts
//!
//! Each client is generic over its [`HttpClient`](crate::transport::HttpClient)
//! and defaults to [`ReqwestClient`](crate::transport::ReqwestClient).

mod api;
mod oauth;
mod webhook;

#[cfg(test)]
mod api_tests;
#[cfg(test)]
mod webhook_tests;

pub use api::ApiClient;
pub use oauth::{ExchangeOptions, OAuthClient, TokenResponse};
pub use webhook::WebhookClient;

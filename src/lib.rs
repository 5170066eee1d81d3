//! slackey: a client library for the Slack Web API.
//!
//! Three clients cover the three ways of talking to Slack:
//!
//! - [`ApiClient`] calls Web API methods with an access token
//! - [`OAuthClient`] exchanges OAuth authorization codes for tokens
//! - [`WebhookClient`] posts messages to an Incoming Webhook
//!
//! Use [`get_api_client`], [`get_oauth_client`] and [`get_webhook_client`]
//! to construct them with the default reqwest transport, or the
//! `with_http_client` constructors to supply your own
//! [`HttpClient`](transport::HttpClient).

pub mod api;
pub mod clients;
pub mod config;
mod facade;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use api::{ArgValue, Error, MethodArgs, ResponseBody, SlackError};
pub use clients::{ApiClient, ExchangeOptions, OAuthClient, TokenResponse, WebhookClient};
pub use config::{
    ApiClientConfig, ConfigError, OAuthClientConfig, TomlConfig, WebhookClientConfig,
};
pub use facade::{get_api_client, get_oauth_client, get_webhook_client};

//! Entry points that construct clients with the default transport.

use crate::clients::{ApiClient, OAuthClient, WebhookClient};
use crate::config::{ApiClientConfig, ConfigError, OAuthClientConfig, WebhookClientConfig};

/// Returns an [`ApiClient`] for a bare token or a full [`ApiClientConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`] if the token is empty.
pub fn get_api_client(config: impl Into<ApiClientConfig>) -> Result<ApiClient, ConfigError> {
    ApiClient::new(config)
}

/// Returns an [`OAuthClient`] for the given application credentials.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`] if the client ID or secret is empty.
pub fn get_oauth_client(config: OAuthClientConfig) -> Result<OAuthClient, ConfigError> {
    OAuthClient::new(config)
}

/// Returns a [`WebhookClient`] for a bare URL or a [`WebhookClientConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`] if the webhook URL is empty.
pub fn get_webhook_client(
    config: impl Into<WebhookClientConfig>,
) -> Result<WebhookClient, ConfigError> {
    WebhookClient::new(config)
}

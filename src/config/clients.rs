//! Per-client configuration.
//!
//! Each struct can be built in code or deserialized from a configuration
//! file. Required credentials default to empty so that a missing field is
//! reported by [`validate`](ApiClientConfig::validate) with a hint, rather
//! than as a parse error.

use std::fmt;

use serde::Deserialize;

use super::error::{ConfigError, field};

/// Configuration for [`ApiClient`](crate::clients::ApiClient).
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiClientConfig {
    /// Access token sent with every method call (required)
    #[serde(default)]
    pub token: String,

    /// Base URL for method calls (default: [`defaults::API_URL`](super::defaults::API_URL))
    pub api_url: Option<String>,
}

impl ApiClientConfig {
    /// Creates a configuration with the given token and the default base URL.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: None,
        }
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Checks that all required fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the token is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.is_empty() {
            return Err(ConfigError::missing(
                field::TOKEN,
                "An access token is required to make calls to the Slack API.",
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ApiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClientConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl From<&str> for ApiClientConfig {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ApiClientConfig {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

/// Configuration for [`OAuthClient`](crate::clients::OAuthClient).
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OAuthClientConfig {
    /// Application client ID (required)
    #[serde(default)]
    pub client_id: String,

    /// Application client secret (required)
    #[serde(default)]
    pub client_secret: String,

    /// Redirect URI used when a code exchange does not name one
    pub auth_redirect_uri: Option<String>,

    /// Base URL for method calls (default: [`defaults::API_URL`](super::defaults::API_URL))
    pub api_url: Option<String>,
}

impl OAuthClientConfig {
    /// Creates a configuration with the given application credentials.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            auth_redirect_uri: None,
            api_url: None,
        }
    }

    /// Sets the default redirect URI.
    #[must_use]
    pub fn with_auth_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.auth_redirect_uri = Some(uri.into());
        self
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Checks that all required fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the client ID or the
    /// client secret is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client_id.is_empty() {
            return Err(ConfigError::missing(
                field::CLIENT_ID,
                "A client ID is required to authorize users with the Slack API.",
            ));
        }
        if self.client_secret.is_empty() {
            return Err(ConfigError::missing(
                field::CLIENT_SECRET,
                "A client secret is required to authorize users with the Slack API.",
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for OAuthClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("auth_redirect_uri", &self.auth_redirect_uri)
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Configuration for [`WebhookClient`](crate::clients::WebhookClient).
///
/// The webhook URL is itself the credential, so `Debug` hides it.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookClientConfig {
    /// Incoming Webhook URL (required)
    #[serde(default)]
    pub webhook_url: String,
}

impl WebhookClientConfig {
    /// Creates a configuration for the given webhook URL.
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }

    /// Checks that all required fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the webhook URL is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook_url.is_empty() {
            return Err(ConfigError::missing(
                field::WEBHOOK_URL,
                "An Incoming Webhook URL is required to send webhook messages.",
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for WebhookClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookClientConfig")
            .field("webhook_url", &"<redacted>")
            .finish()
    }
}

impl From<&str> for WebhookClientConfig {
    fn from(webhook_url: &str) -> Self {
        Self::new(webhook_url)
    }
}

impl From<String> for WebhookClientConfig {
    fn from(webhook_url: String) -> Self {
        Self::new(webhook_url)
    }
}

//! TOML configuration file parsing.
//!
//! A configuration file holds one optional section per client kind:
//!
//! ```toml
//! [api]
//! token = "xoxp-..."
//!
//! [oauth]
//! client_id = "123.456"
//! client_secret = "..."
//! auth_redirect_uri = "https://example.com/oauth/callback"
//!
//! [webhook]
//! webhook_url = "https://hooks.slack.com/services/T000/B000/XXXX"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;
use super::clients::{ApiClientConfig, OAuthClientConfig, WebhookClientConfig};
use super::error::field;

/// Root configuration structure from a TOML file.
///
/// Sections are optional; a consumer only needs the ones for the clients it
/// builds. Required fields inside a section are checked when the client is
/// constructed.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API client section
    pub api: Option<ApiClientConfig>,

    /// OAuth client section
    pub oauth: Option<OAuthClientConfig>,

    /// Webhook client section
    pub webhook: Option<WebhookClientConfig>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Returns the `[api]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the section is absent.
    pub fn api_config(&self) -> Result<&ApiClientConfig, ConfigError> {
        self.api.as_ref().ok_or_else(|| {
            ConfigError::missing(
                field::TOKEN,
                "Add an [api] section with a token to the config file.",
            )
        })
    }

    /// Returns the `[oauth]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the section is absent.
    pub fn oauth_config(&self) -> Result<&OAuthClientConfig, ConfigError> {
        self.oauth.as_ref().ok_or_else(|| {
            ConfigError::missing(
                field::CLIENT_ID,
                "Add an [oauth] section with client_id and client_secret to the config file.",
            )
        })
    }

    /// Returns the `[webhook]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the section is absent.
    pub fn webhook_config(&self) -> Result<&WebhookClientConfig, ConfigError> {
        self.webhook.as_ref().ok_or_else(|| {
            ConfigError::missing(
                field::WEBHOOK_URL,
                "Add a [webhook] section with a webhook_url to the config file.",
            )
        })
    }
}

//! Error types for client construction and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Returned when a client cannot be constructed, before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A required credential is missing or empty.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The API access token.
    pub const TOKEN: &str = "token";
    /// The OAuth application client ID.
    pub const CLIENT_ID: &str = "client_id";
    /// The OAuth application client secret.
    pub const CLIENT_SECRET: &str = "client_secret";
    /// The Incoming Webhook URL.
    pub const WEBHOOK_URL: &str = "webhook_url";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }

    /// Returns the missing field name, if this is a `MissingRequired` error.
    #[must_use]
    pub const fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequired { field, .. } => Some(*field),
            _ => None,
        }
    }
}

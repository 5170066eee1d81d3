//! Configuration layer for slackey clients.
//!
//! This module provides:
//! - Per-client configuration ([`ApiClientConfig`], [`OAuthClientConfig`],
//!   [`WebhookClientConfig`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Construction errors ([`ConfigError`])
//! - Default values ([`defaults`])
//!
//! # Validation
//!
//! Required credentials are checked when a client is constructed, never at
//! call time. A client value therefore always holds a complete configuration.
//! Only emptiness is checked: URLs and tokens are otherwise passed through
//! as given.

mod clients;
pub mod defaults;
mod error;
mod toml;

#[cfg(test)]
mod clients_tests;

pub use clients::{ApiClientConfig, OAuthClientConfig, WebhookClientConfig};
pub use error::{ConfigError, field};
pub use self::toml::TomlConfig;

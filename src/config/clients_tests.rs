//! Tests for per-client configuration validation.

use super::{ApiClientConfig, ConfigError, OAuthClientConfig, WebhookClientConfig, field};

mod api_client_config {
    use super::*;

    #[test]
    fn bare_token_converts_to_config() {
        let config = ApiClientConfig::from("xoxp-1");

        assert_eq!(config.token, "xoxp-1");
        assert_eq!(config.api_url, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_token_is_missing() {
        let err = ApiClientConfig::from("").validate().unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingRequired { field: f, .. } if f == field::TOKEN
        ));
        assert!(err.to_string().contains("Missing required field: token"));
    }

    #[test]
    fn api_url_override_is_kept() {
        let config = ApiClientConfig::new("t").with_api_url("YYY");

        assert_eq!(config.api_url.as_deref(), Some("YYY"));
    }

    #[test]
    fn debug_redacts_token() {
        let debug = format!("{:?}", ApiClientConfig::new("xoxb-secret").with_api_url("YYY"));

        assert!(debug.contains("YYY"));
        assert!(!debug.contains("xoxb-secret"));
    }
}

mod oauth_client_config {
    use super::*;

    #[test]
    fn complete_credentials_are_valid() {
        let config = OAuthClientConfig::new("XXX", "YYY").with_auth_redirect_uri("WWW");

        assert!(config.validate().is_ok());
        assert_eq!(config.auth_redirect_uri.as_deref(), Some("WWW"));
    }

    #[test]
    fn missing_client_id_is_reported() {
        let err = OAuthClientConfig::new("", "YYY").validate().unwrap_err();

        assert_eq!(err.missing_field(), Some(field::CLIENT_ID));
    }

    #[test]
    fn missing_client_secret_is_reported() {
        let err = OAuthClientConfig::new("XXX", "").validate().unwrap_err();

        assert_eq!(err.missing_field(), Some(field::CLIENT_SECRET));
    }

    #[test]
    fn debug_redacts_secret() {
        let debug = format!("{:?}", OAuthClientConfig::new("XXX", "top-secret"));

        assert!(debug.contains("XXX"));
        assert!(!debug.contains("top-secret"));
    }
}

mod webhook_client_config {
    use super::*;

    #[test]
    fn url_converts_to_config() {
        let config = WebhookClientConfig::from(String::from("https://hooks.slack.com/x"));

        assert_eq!(config.webhook_url, "https://hooks.slack.com/x");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_url_is_missing() {
        let err = WebhookClientConfig::default().validate().unwrap_err();

        assert_eq!(err.missing_field(), Some(field::WEBHOOK_URL));
    }

    #[test]
    fn debug_redacts_url() {
        let debug = format!("{:?}", WebhookClientConfig::new("https://hooks.slack.com/T/B/X"));

        assert!(debug.contains("WebhookClientConfig"));
        assert!(!debug.contains("hooks.slack.com"));
    }
}

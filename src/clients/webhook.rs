//! Client for Incoming Webhooks.

use std::fmt;

use http::HeaderValue;
use http::header::CONTENT_TYPE;
use serde::Serialize;
use url::form_urlencoded;

use crate::api::{Error, execute_webhook};
use crate::config::defaults::FORM_CONTENT_TYPE;
use crate::config::{ConfigError, WebhookClientConfig};
use crate::transport::{HttpClient, HttpRequest, ReqwestClient, RequestBody};

const PAYLOAD_FIELD: &str = "payload";

/// Client for posting to a single Incoming Webhook.
///
/// The webhook URL is the only credential; no token is sent.
///
/// # Example
///
/// ```no_run
/// use slackey::WebhookClient;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WebhookClient::new("https://hooks.slack.com/services/T000/B000/XXXX")?;
/// client.send(&json!({"text": "Deploy finished"})).await?;
/// # Ok(())
/// # }
/// ```
pub struct WebhookClient<H = ReqwestClient> {
    http: H,
    webhook_url: String,
}

impl WebhookClient<ReqwestClient> {
    /// Creates a client using the default reqwest transport.
    ///
    /// Accepts either a bare URL or a [`WebhookClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the webhook URL is empty.
    pub fn new(config: impl Into<WebhookClientConfig>) -> Result<Self, ConfigError> {
        Self::with_http_client(ReqwestClient::new(), config)
    }
}

impl<H> WebhookClient<H> {
    /// Creates a client using the given HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the webhook URL is empty.
    pub fn with_http_client(
        http: H,
        config: impl Into<WebhookClientConfig>,
    ) -> Result<Self, ConfigError> {
        let config = config.into();
        config.validate()?;

        Ok(Self {
            http,
            webhook_url: config.webhook_url,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http
    }

    /// Returns the webhook URL.
    #[must_use]
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Builds the webhook request: a form body with a single `payload`
    /// field holding the JSON-serialized payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the payload cannot be serialized.
    pub fn build_request<T: Serialize + ?Sized>(
        &self,
        payload: &T,
    ) -> Result<HttpRequest, Error> {
        let json = serde_json::to_string(payload)?;
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair(PAYLOAD_FIELD, &json)
            .finish();

        Ok(HttpRequest::post(self.webhook_url.clone())
            .with_header(
                CONTENT_TYPE,
                HeaderValue::from_static(FORM_CONTENT_TYPE),
            )
            .with_body(RequestBody::Raw(body.into_bytes())))
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Sends a payload to the webhook.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] if the payload cannot be serialized
    /// - [`Error::Transport`] if the HTTP request fails
    /// - [`Error::Protocol`] if the webhook replies with anything but `ok`
    pub async fn send<T: Serialize + ?Sized>(&self, payload: &T) -> Result<(), Error> {
        let request = self.build_request(payload)?;
        execute_webhook(&self.http, request).await
    }
}

impl<H> fmt::Debug for WebhookClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookClient")
            .field("webhook_url", &"<redacted>")
            .finish_non_exhaustive()
    }
}

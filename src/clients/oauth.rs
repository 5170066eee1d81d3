//! Client for the OAuth code exchange.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::{Error, execute_api};
use crate::config::{ConfigError, OAuthClientConfig, defaults};
use crate::transport::{HttpClient, HttpRequest, ReqwestClient, RequestBody};

/// Options for a single code exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeOptions {
    /// Redirect URI that produced the code; overrides the client's default.
    pub redirect_uri: Option<String>,
}

impl ExchangeOptions {
    /// Creates options naming the given redirect URI.
    #[must_use]
    pub fn with_redirect_uri(uri: impl Into<String>) -> Self {
        Self {
            redirect_uri: Some(uri.into()),
        }
    }
}

/// Access token returned by `oauth.access`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    /// The granted access token
    pub access_token: String,
    /// Comma-separated list of granted scopes
    #[serde(default)]
    pub scope: Option<String>,
    /// Name of the authorizing team
    #[serde(default)]
    pub team_name: Option<String>,
    /// ID of the authorizing team
    #[serde(default)]
    pub team_id: Option<String>,
    /// ID of the authorizing user
    #[serde(default)]
    pub user_id: Option<String>,
    /// Any other fields in the response
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Client for exchanging OAuth authorization codes for access tokens.
///
/// # Example
///
/// ```no_run
/// use slackey::{OAuthClient, OAuthClientConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OAuthClient::new(
///     OAuthClientConfig::new("123.456", "secret")
///         .with_auth_redirect_uri("https://example.com/oauth/callback"),
/// )?;
/// let token = client.exchange_code("CODE", None).await?;
/// println!("Authorized with scopes {:?}", token.scope);
/// # Ok(())
/// # }
/// ```
pub struct OAuthClient<H = ReqwestClient> {
    http: H,
    client_id: String,
    client_secret: String,
    auth_redirect_uri: Option<String>,
    api_url: String,
}

impl OAuthClient<ReqwestClient> {
    /// Creates a client using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the client ID or secret is empty.
    pub fn new(config: OAuthClientConfig) -> Result<Self, ConfigError> {
        Self::with_http_client(ReqwestClient::new(), config)
    }
}

impl<H> OAuthClient<H> {
    /// Creates a client using the given HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if the client ID or secret is empty.
    pub fn with_http_client(http: H, config: OAuthClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            http,
            client_id: config.client_id,
            client_secret: config.client_secret,
            auth_redirect_uri: config.auth_redirect_uri,
            api_url: config
                .api_url
                .unwrap_or_else(|| defaults::API_URL.to_string()),
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http
    }

    /// Returns the application client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the default redirect URI, if configured.
    #[must_use]
    pub fn auth_redirect_uri(&self) -> Option<&str> {
        self.auth_redirect_uri.as_deref()
    }

    /// Returns the base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Builds the `oauth.access` request.
    ///
    /// `redirect_uri` comes from `options`, then the client default, and is
    /// left out entirely when neither is set.
    #[must_use]
    pub fn build_request(&self, code: &str, options: Option<&ExchangeOptions>) -> HttpRequest {
        let redirect_uri = options
            .and_then(|o| o.redirect_uri.as_deref())
            .or(self.auth_redirect_uri.as_deref());

        let mut fields = vec![
            ("client_id".to_string(), self.client_id.clone()),
            ("client_secret".to_string(), self.client_secret.clone()),
            ("code".to_string(), code.to_string()),
        ];
        if let Some(uri) = redirect_uri {
            fields.push(("redirect_uri".to_string(), uri.to_string()));
        }

        let url = format!("{}{}", self.api_url, defaults::OAUTH_ACCESS_METHOD);
        HttpRequest::post(url).with_body(RequestBody::Form(fields))
    }
}

impl<H: HttpClient> OAuthClient<H> {
    /// Exchanges an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the HTTP request fails
    /// - [`Error::Protocol`] if the API replies with `ok: false`
    /// - [`Error::Json`] if the reply has no `access_token`
    pub async fn exchange_code(
        &self,
        code: &str,
        options: Option<&ExchangeOptions>,
    ) -> Result<TokenResponse, Error> {
        tracing::debug!(client_id = %self.client_id, "Exchanging OAuth code");
        let request = self.build_request(code, options);

        let body = execute_api(&self.http, request).await?;
        Ok(serde_json::from_value(Value::Object(body))?)
    }
}

impl<H> fmt::Debug for OAuthClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("auth_redirect_uri", &self.auth_redirect_uri)
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

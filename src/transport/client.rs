//! The reqwest-backed transport.

use url::Url;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, MultipartPart, RequestBody};
use crate::config::defaults::FORM_CONTENT_TYPE;

/// Default transport for every client, backed by `reqwest::Client`.
///
/// Form bodies are URL-encoded and get a form content type unless the
/// request already names one. The effective URL, token query included,
/// is recorded on the response.
///
/// ```no_run
/// use slackey::transport::{ReqwestClient, HttpClient, HttpRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let request = HttpRequest::get("https://slack.com/api/api.test");
/// let reply = client.request(request).await?;
/// println!("{}", reply.body_text_lossy());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Wraps a default `reqwest::Client`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Wraps a preconfigured `reqwest::Client` (timeouts, proxies, TLS).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the final URL: the request URL with its query parameters appended.
pub(super) fn resolve_url(req: &HttpRequest) -> Result<Url, HttpError> {
    let mut url =
        Url::parse(&req.url).map_err(|e| HttpError::InvalidUrl(format!("{}: {e}", req.url)))?;

    if !req.query.is_empty() {
        url.query_pairs_mut().extend_pairs(&req.query);
    }

    Ok(url)
}

fn multipart_form(parts: Vec<MultipartPart>) -> reqwest::multipart::Form {
    parts
        .into_iter()
        .fold(reqwest::multipart::Form::new(), |form, part| {
            let mut field = reqwest::multipart::Part::bytes(part.data);
            if let Some(file_name) = part.file_name {
                field = field.file_name(file_name);
            }
            form.part(part.name, field)
        })
}

impl ReqwestClient {
    /// Assembles the reqwest request: final URL, headers and encoded body.
    pub(super) fn prepare(&self, req: HttpRequest) -> Result<reqwest::Request, HttpError> {
        let url = resolve_url(&req)?;
        let has_content_type = req.headers.contains_key(http::header::CONTENT_TYPE);

        let mut builder = self.inner.request(req.method, url);

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        builder = match req.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => {
                let encoded = serde_urlencoded::to_string(&fields)
                    .map_err(|e| HttpError::Body(e.to_string()))?;
                if !has_content_type {
                    builder = builder.header(http::header::CONTENT_TYPE, FORM_CONTENT_TYPE);
                }
                builder.body(encoded)
            }
            RequestBody::Multipart(parts) => builder.multipart(multipart_form(parts)),
            RequestBody::Raw(bytes) => builder.body(bytes),
        };

        builder.build().map_err(|e| HttpError::InvalidUrl(e.to_string()))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let request = self.prepare(req)?;

        let response = self.inner.execute(request).await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let effective_url = response.url().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body).with_url(effective_url))
    }
}

//! Transport-neutral request and reply values, and the trait that sends them.

use super::HttpError;

/// Body of an [`HttpRequest`].
///
/// A request carries at most one body encoding. Query parameters travel
/// separately in [`HttpRequest::query`], so a request may use both channels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// Fields to be sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
    /// Parts to be sent as `multipart/form-data`.
    Multipart(Vec<MultipartPart>),
    /// Pre-encoded bytes; the content type is taken from the request headers.
    Raw(Vec<u8>),
}

impl RequestBody {
    /// Returns true if there is no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the form fields, if this is a form body.
    #[must_use]
    pub fn form_fields(&self) -> Option<&[(String, String)]> {
        match self {
            Self::Form(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the multipart parts, if this is a multipart body.
    #[must_use]
    pub fn multipart_parts(&self) -> Option<&[MultipartPart]> {
        match self {
            Self::Multipart(parts) => Some(parts),
            _ => None,
        }
    }

    /// Returns the raw bytes, if this is a pre-encoded body.
    #[must_use]
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// A single field of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPart {
    /// Form field name
    pub name: String,
    /// Field contents
    pub data: Vec<u8>,
    /// File name reported for the part, if any
    pub file_name: Option<String>,
}

impl MultipartPart {
    /// Creates a part with the given name and contents.
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
            file_name: None,
        }
    }

    /// Sets the file name reported for this part.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

/// A fully shaped outgoing request.
///
/// Builders produce it as plain data and any [`HttpClient`] can send it,
/// which keeps request shaping testable without a network. The URL is kept as the exact string the
/// caller built; no path normalization happens before the transport sees it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: http::Method,
    /// Target URL, exactly as built
    pub url: String,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Query-string parameters appended to the URL by the transport
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
    /// Whether the response body should be parsed as JSON.
    ///
    /// `None` leaves the decision to the executor.
    pub parse_json: Option<bool>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers and query are empty, the body is [`RequestBody::Empty`].
    #[must_use]
    pub fn new(method: http::Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: http::HeaderMap::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
            parse_json: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Sets the query-string parameters.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Overrides whether the response body is parsed as JSON.
    #[must_use]
    pub const fn with_parse_json(mut self, parse_json: bool) -> Self {
        self.parse_json = Some(parse_json);
        self
    }

    /// Returns the value of a query parameter, if present.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A buffered reply. The status is kept for callers; reply
/// interpretation looks only at the body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Raw body bytes
    pub body: Vec<u8>,
    /// Effective URL of the request that produced this response, if known
    pub url: Option<String>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            url: None,
        }
    }

    /// Records the effective URL the response came from.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The transport every client sends through.
///
/// Timeouts, redirects and connection pooling belong to the implementation;
/// the clients never impose their own and never retry.
///
/// ```ignore
/// use slackey::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Canned(HttpResponse);
///
/// impl HttpClient for Canned {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends `req`, appending its query to the URL and encoding its body.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Connection`] if the server cannot be reached
    /// - [`HttpError::Timeout`] if the transport gives up waiting
    /// - [`HttpError::InvalidUrl`] if the URL does not parse
    /// - [`HttpError::Body`] if the body cannot be assembled
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

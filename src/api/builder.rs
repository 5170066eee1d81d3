//! Request shaping for API method calls.
//!
//! Every method is sent according to an [`Encoding`] chosen from a fixed
//! table keyed by method name. Methods not in the table use
//! [`Encoding::Query`].

use http::HeaderValue;
use http::header::CONTENT_TYPE;
use url::form_urlencoded;

use crate::config::defaults::FORM_CONTENT_TYPE;
use crate::transport::{HttpRequest, MultipartPart, RequestBody};

use super::{ArgValue, Error, MethodArgs};

/// Argument that carries the bearer token.
pub const TOKEN_ARG: &str = "token";
/// Argument holding message attachments.
pub const ATTACHMENTS_ARG: &str = "attachments";
/// Argument holding binary upload data.
pub const FILE_ARG: &str = "file";
/// Argument holding textual upload data.
pub const CONTENT_ARG: &str = "content";
/// Argument naming the uploaded file.
pub const FILENAME_ARG: &str = "filename";

/// How a method's arguments are put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// GET with every argument in the query string.
    Query,
    /// POST with every argument in a form body.
    ///
    /// Message text can exceed practical URL length limits, so these
    /// methods never use the query string.
    MessagePost,
    /// POST where `file` travels as multipart data or `content` as a form
    /// body; every other argument stays in the query string.
    FileUpload,
}

/// Methods whose arguments are not sent with [`Encoding::Query`].
const METHOD_ENCODINGS: &[(&str, Encoding)] = &[
    ("chat.postMessage", Encoding::MessagePost),
    ("chat.postEphemeral", Encoding::MessagePost),
    ("chat.update", Encoding::MessagePost),
    ("files.upload", Encoding::FileUpload),
];

impl Encoding {
    /// Returns the encoding used for the given method (exact name match).
    #[must_use]
    pub fn for_method(method: &str) -> Self {
        METHOD_ENCODINGS
            .iter()
            .find(|(name, _)| *name == method)
            .map_or(Self::Query, |(_, encoding)| *encoding)
    }
}

/// Builds [`HttpRequest`]s for API method calls.
///
/// The target URL is `api_url + method`, with no slash inserted or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRequestBuilder {
    api_url: String,
}

impl MethodRequestBuilder {
    /// Creates a builder targeting the given base URL.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Returns the base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Builds the request for calling `method` with `args`.
    ///
    /// `args` is copied before `token` is injected; the injected token
    /// replaces any caller-supplied `token` argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if an argument has no encoding on
    /// the channel it must travel on (for example binary data outside a
    /// `files.upload` `file` argument).
    pub fn build(
        &self,
        method: &str,
        args: &MethodArgs,
        token: &str,
    ) -> Result<HttpRequest, Error> {
        let url = format!("{}{method}", self.api_url);
        let mut args = args.clone();
        args.insert(TOKEN_ARG, token);

        let encoding = Encoding::for_method(method);
        tracing::debug!(method, ?encoding, "Building API request");

        match encoding {
            Encoding::Query => Ok(HttpRequest::get(url).with_query(encode_fields(args)?)),
            Encoding::MessagePost => build_message_post(url, args),
            Encoding::FileUpload => build_file_upload(url, args),
        }
    }
}

fn form_content_type(request: HttpRequest) -> HttpRequest {
    request.with_header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
}

/// Renders every argument as a string field.
fn encode_fields(args: MethodArgs) -> Result<Vec<(String, String)>, Error> {
    args.into_iter()
        .map(|(name, value)| match value.to_field_value() {
            Some(field) => Ok((name, field)),
            None => Err(Error::invalid_argument(
                name,
                "binary data can only be sent as a files.upload file",
            )),
        })
        .collect()
}

fn build_message_post(url: String, mut args: MethodArgs) -> Result<HttpRequest, Error> {
    // A collection and its pre-serialized JSON string must encode identically.
    if let Some(ArgValue::Array(items)) = args.get(ATTACHMENTS_ARG) {
        let serialized = serde_json::to_string(items)?;
        args.insert(ATTACHMENTS_ARG, serialized);
    }

    let fields = encode_fields(args)?;
    Ok(form_content_type(HttpRequest::post(url)).with_body(RequestBody::Form(fields)))
}

fn build_file_upload(url: String, mut args: MethodArgs) -> Result<HttpRequest, Error> {
    let file = args.remove(FILE_ARG).map(file_data).transpose()?;
    let content = args.remove(CONTENT_ARG).map(content_text).transpose()?;

    let request = match (file, content) {
        (Some(data), content) => {
            let mut part = MultipartPart::new(FILE_ARG, data);
            if let Some(name) = args.get(FILENAME_ARG).and_then(ArgValue::to_field_value) {
                part = part.with_file_name(name);
            }
            let mut parts = vec![part];
            // Only one body per request: content rides along as a text part.
            if let Some(content) = content {
                parts.push(MultipartPart::new(CONTENT_ARG, content.into_bytes()));
            }
            HttpRequest::post(url).with_body(RequestBody::Multipart(parts))
        }
        (None, Some(content)) => {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .append_pair(CONTENT_ARG, &content)
                .finish();
            form_content_type(HttpRequest::post(url))
                .with_body(RequestBody::Raw(encoded.into_bytes()))
        }
        (None, None) => HttpRequest::post(url),
    };

    Ok(request.with_query(encode_fields(args)?))
}

fn file_data(value: ArgValue) -> Result<Vec<u8>, Error> {
    match value {
        ArgValue::Bytes(data) => Ok(data),
        ArgValue::Text(text) => Ok(text.into_bytes()),
        other => Err(Error::invalid_argument(
            FILE_ARG,
            format!("expected bytes or text, got {}", other.kind()),
        )),
    }
}

fn content_text(value: ArgValue) -> Result<String, Error> {
    value.to_field_value().ok_or_else(|| {
        Error::invalid_argument(CONTENT_ARG, "binary data must be sent as `file`")
    })
}

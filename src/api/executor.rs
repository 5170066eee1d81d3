//! Request execution and response normalization.
//!
//! Two conventions are supported:
//! - API methods reply with a JSON envelope `{ "ok": bool, "error"?: string, ... }`
//!   ([`execute_api`]).
//! - Incoming webhooks reply with the plain text `ok` ([`execute_webhook`]).
//!
//! Transport failures are returned unchanged in both cases. Only the body is
//! inspected; the status code carries no meaning here.

use serde_json::{Map, Value};

use crate::transport::{HttpClient, HttpRequest, HttpResponse};

use super::{Error, SlackError};

/// Successful API response with the `ok` field removed.
pub type ResponseBody = Map<String, Value>;

/// Body of a successful webhook reply.
pub const WEBHOOK_OK: &str = "ok";

const OK_FIELD: &str = "ok";
const ERROR_FIELD: &str = "error";

/// Sends an API request and unwraps the JSON envelope.
///
/// The body is parsed as JSON unless the request sets
/// [`HttpRequest::parse_json`] to `Some(false)`.
///
/// # Errors
///
/// - [`Error::Transport`] if the HTTP client fails
/// - [`Error::Protocol`] if the envelope is not `ok: true`; the message is
///   the envelope's `error` field, and the request URL and raw body are attached
pub async fn execute_api<H: HttpClient>(
    client: &H,
    request: HttpRequest,
) -> Result<ResponseBody, Error> {
    let parse_json = request.parse_json.unwrap_or(true);
    let request_url = request.url.clone();

    let response = client.request(request).await.inspect_err(|e| {
        tracing::debug!(url = %request_url, "API request failed: {e}");
    })?;

    let raw = response.body_text_lossy();
    let body = if parse_json {
        serde_json::from_slice(&response.body).unwrap_or_else(|_| Value::String(raw.clone()))
    } else {
        Value::String(raw.clone())
    };

    match unwrap_envelope(body) {
        Ok(payload) => {
            tracing::debug!(url = %request_url, "API call succeeded");
            Ok(payload)
        }
        Err(e) => {
            tracing::warn!(url = %request_url, "API call returned an error: {e}");
            Err(with_diagnostics(e, &response, request_url, raw).into())
        }
    }
}

/// Sends a webhook request and checks for the literal `ok` reply.
///
/// # Errors
///
/// - [`Error::Transport`] if the HTTP client fails
/// - [`Error::Protocol`] if the reply is anything other than `ok`; the
///   message is the reply itself
pub async fn execute_webhook<H: HttpClient>(
    client: &H,
    request: HttpRequest,
) -> Result<(), Error> {
    let request_url = request.url.clone();

    let response = client.request(request).await.inspect_err(|e| {
        tracing::debug!("Webhook request failed: {e}");
    })?;

    let raw = response.body_text_lossy();
    if raw == WEBHOOK_OK {
        tracing::debug!("Webhook accepted");
        return Ok(());
    }

    let message = (!raw.is_empty()).then(|| raw.clone());
    let error = SlackError::new(message);
    tracing::warn!("Webhook returned an error: {error}");
    Err(with_diagnostics(error, &response, request_url, raw).into())
}

/// Splits an envelope into its payload, or the error it reports.
fn unwrap_envelope(body: Value) -> Result<ResponseBody, SlackError> {
    let Value::Object(mut payload) = body else {
        return Err(SlackError::new(None));
    };

    let ok = payload
        .remove(OK_FIELD)
        .and_then(|ok| ok.as_bool())
        .unwrap_or(false);
    if ok {
        return Ok(payload);
    }

    let message = payload
        .get(ERROR_FIELD)
        .and_then(Value::as_str)
        .map(str::to_owned);
    Err(SlackError::new(message))
}

fn with_diagnostics(
    error: SlackError,
    response: &HttpResponse,
    request_url: String,
    raw_body: String,
) -> SlackError {
    let url = response.url.clone().unwrap_or(request_url);
    error.with_request_url(url).with_response_body(raw_body)
}

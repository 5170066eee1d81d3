//! Shared fixtures for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that returns a configurable sequence of responses
/// and records every request it receives.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Replies once with the given body and a 200 status.
    pub fn replying(body: &str) -> Self {
        Self::new(vec![Ok(response(body))])
    }

    /// Replies once with the given JSON value.
    pub fn replying_json(body: &serde_json::Value) -> Self {
        Self::replying(&body.to_string())
    }

    /// Fails once with the given transport error.
    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns the only request received, panicking if there was not exactly one.
    pub fn single_request(&self) -> HttpRequest {
        let requests = self.captured_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

/// A 200 response with the given body.
pub fn response(body: &str) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::OK,
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}

//! Transport layer: the injected HTTP collaborator.
//!
//! This module provides types and traits for:
//! - Describing HTTP requests ([`HttpRequest`], [`RequestBody`], [`MultipartPart`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//!
//! Nothing above this layer touches the network; clients only build
//! [`HttpRequest`] values and interpret [`HttpResponse`] values.

mod client;
mod error;
mod http;


pub use self::http::{HttpClient, HttpRequest, HttpResponse, MultipartPart, RequestBody};
pub use client::ReqwestClient;
pub use error::HttpError;

//! HTTP transport seam between the accessor crate and the network.
//!
//! # Design
//! Requests and responses are plain owned data. The crate builds
//! `HttpRequest` values and interprets `HttpResponse` values; the actual
//! round-trip belongs to an [`HttpTransport`] implementation supplied by the
//! caller. Keeping the transport behind a trait object keeps the accessors
//! free of any concrete HTTP library and lets tests substitute an in-memory
//! stub for the network.

use async_trait::async_trait;

/// Boxed error type returned by transport implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// HTTP method for a request. Covers exactly the verbs the wire contract uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// `url` is absolute, query string included. Built by the accessor
/// operations and handed to the transport unmodified.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The shared HTTP client collaborator.
///
/// Implementations own connection handling, timeout policy and TLS. A
/// non-2xx response must come back as `Ok` data rather than an error;
/// status interpretation happens in [`ApiClient`](crate::ApiClient).
/// Implementations are shared behind an `Arc`, so concurrent calls must be
/// safe without external locking.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

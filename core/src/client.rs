//! Shared client state and the uniform dispatch path.
//!
//! # Design
//! [`ApiClient`] holds only the API base URL and the transport collaborator;
//! it carries no other state between calls, so concurrent operations are
//! independent. Every accessor funnels through [`ApiClient::dispatch`]
//! (transport call + status check) and wraps its whole body in
//! [`with_diagnostics`], which logs a failed operation exactly once and
//! rethrows the error unchanged.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};

/// Asynchronous accessor client for the blog API.
///
/// Cheap to clone; clones share the same transport.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    /// Create a client rooted at `base_url`. A trailing slash is stripped so
    /// path concatenation stays uniform.
    pub fn new(base_url: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a request and enforce the uniform success contract: transport
    /// failures become [`RequestError::Transport`], non-2xx responses become
    /// [`RequestError::Status`].
    pub(crate) async fn dispatch(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, RequestError> {
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(RequestError::Transport)?;
        if !(200..300).contains(&response.status) {
            return Err(RequestError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Await `op`; on failure emit one diagnostic event carrying `context`, then
/// rethrow the error unchanged. Applied uniformly around every accessor body
/// so logging is never duplicated per operation.
pub(crate) async fn with_diagnostics<T>(
    context: &'static str,
    op: impl Future<Output = Result<T, RequestError>>,
) -> Result<T, RequestError> {
    match op.await {
        Ok(value) => Ok(value),
        Err(error) => {
            tracing::error!(error = %error, "{}", context);
            Err(error)
        }
    }
}

pub(crate) fn encode_json<T: Serialize>(value: &T) -> Result<String, RequestError> {
    serde_json::to_string(value).map_err(|e| RequestError::Serialization(e.to_string()))
}

pub(crate) fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    serde_json::from_str(body).map_err(|e| RequestError::Deserialization(e.to_string()))
}

pub(crate) fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

#[cfg(test)]
pub(crate) mod stub {
    //! In-memory transport for unit tests: returns a canned reply and
    //! records every request it sees.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::http::{BoxError, HttpRequest, HttpResponse, HttpTransport};
    use crate::ApiClient;

    pub(crate) struct StubTransport {
        reply: Result<HttpResponse, String>,
        pub(crate) seen: Mutex<Vec<HttpRequest>>,
    }

    impl StubTransport {
        pub(crate) fn replying(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(HttpResponse {
                    status,
                    headers: Vec::new(),
                    body: body.to_string(),
                }),
                seen: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
            self.seen.lock().unwrap().push(request);
            match &self.reply {
                Ok(response) => Ok(response.clone()),
                Err(message) => Err(message.clone().into()),
            }
        }
    }

    pub(crate) fn client_over(transport: Arc<StubTransport>) -> ApiClient {
        ApiClient::new("http://localhost:3000", transport)
    }
}

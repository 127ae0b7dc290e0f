//! Error type for the accessor operations.
//!
//! # Design
//! A single public error covers the whole surface: the transport failed, the
//! server answered non-2xx, or a JSON boundary broke. There is no retry and
//! no recovery here; errors propagate to the caller unchanged after one
//! diagnostic log event.

use thiserror::Error;

use crate::http::BoxError;

/// Error returned by every accessor operation.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The transport failed to produce a response at all.
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

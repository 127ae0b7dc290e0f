//! Asynchronous accessor crate for a blog-style REST API.
//!
//! # Overview
//! Thin async wrappers over the `/posts`, `/comments` and `/users` resources.
//! Each operation builds an [`HttpRequest`], hands it to the shared
//! [`HttpTransport`] collaborator, checks the status, and decodes the JSON
//! body. Failures are logged once and rethrown unchanged; there is no retry,
//! caching or request coordination here.
//!
//! # Design
//! - [`ApiClient`] holds only the base URL and the transport; calls are
//!   independent and may run concurrently against the shared collaborator.
//! - The transport is a trait object, so callers bring their own HTTP stack;
//!   the crate itself never opens a connection.
//! - One resource per module; partial updates use explicit optional-field
//!   patch structs rather than a generic partial record.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
mod comments;
pub mod error;
pub mod http;
mod posts;
pub mod types;
mod users;

pub use client::ApiClient;
pub use error::RequestError;
pub use http::{BoxError, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use types::{Comment, CommentPatch, NewComment, NewPost, NewUser, Post, PostPatch, User};

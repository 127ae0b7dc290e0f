//! Accessor operations for the `/users` resource.
//!
//! Narrower surface than posts and comments: the API exposes no update or
//! delete for users, and lookup is by exact email rather than by owner id.

use crate::client::{decode_json, encode_json, json_headers, with_diagnostics};
use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{NewUser, User};
use crate::ApiClient;

impl ApiClient {
    /// Fetch every user.
    pub async fn get_users(&self) -> Result<Vec<User>, RequestError> {
        let request = build_list_users(self.base_url());
        with_diagnostics("failed to fetch users", async {
            let response = self.dispatch(request).await?;
            decode_json(&response.body)
        })
        .await
    }

    /// Find the user registered under `email` (exact match, server-side).
    ///
    /// Returns the first match, or `None` when no user matches — a miss is a
    /// normal outcome, never an error. Additional matches are discarded.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RequestError> {
        let request = build_users_by_email(self.base_url(), email);
        with_diagnostics("failed to fetch user by email", async {
            let response = self.dispatch(request).await?;
            let matches: Vec<User> = decode_json(&response.body)?;
            Ok(matches.into_iter().next())
        })
        .await
    }

    /// Create a user; returns the server-assigned record.
    pub async fn create_user(&self, input: &NewUser) -> Result<User, RequestError> {
        with_diagnostics("failed to create user", async {
            let request = build_create_user(self.base_url(), input)?;
            let response = self.dispatch(request).await?;
            decode_json(&response.body)
        })
        .await
    }
}

fn build_list_users(base_url: &str) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url: format!("{base_url}/users"),
        headers: Vec::new(),
        body: None,
    }
}

fn build_users_by_email(base_url: &str, email: &str) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url: format!("{base_url}/users?email={email}"),
        headers: Vec::new(),
        body: None,
    }
}

fn build_create_user(base_url: &str, input: &NewUser) -> Result<HttpRequest, RequestError> {
    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: format!("{base_url}/users"),
        headers: json_headers(),
        body: Some(encode_json(input)?),
    })
}

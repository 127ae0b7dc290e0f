//! Accessor operations for the `/comments` resource.
//!
//! Same shape as the posts accessor, scoped to a post instead of a user.

use crate::client::{decode_json, encode_json, json_headers, with_diagnostics};
use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{Comment, CommentPatch, NewComment};
use crate::ApiClient;

impl ApiClient {
    /// Fetch the comments attached to `post_id`. An empty result is not an
    /// error.
    pub async fn get_comments_by_post_id(
        &self,
        post_id: u64,
    ) -> Result<Vec<Comment>, RequestError> {
        let request = build_comments_by_post(self.base_url(), post_id);
        with_diagnostics("failed to fetch comments", async {
            let response = self.dispatch(request).await?;
            decode_json(&response.body)
        })
        .await
    }

    /// Create a comment; returns the server-assigned record.
    pub async fn create_comment(&self, input: &NewComment) -> Result<Comment, RequestError> {
        with_diagnostics("failed to create comment", async {
            let request = build_create_comment(self.base_url(), input)?;
            let response = self.dispatch(request).await?;
            decode_json(&response.body)
        })
        .await
    }

    /// Apply `patch` to the comment `comment_id`; only `Some` fields change.
    pub async fn update_comment(
        &self,
        comment_id: u64,
        patch: &CommentPatch,
    ) -> Result<Comment, RequestError> {
        with_diagnostics("failed to update comment", async {
            let request = build_update_comment(self.base_url(), comment_id, patch)?;
            let response = self.dispatch(request).await?;
            decode_json(&response.body)
        })
        .await
    }

    /// Delete the comment `comment_id`.
    pub async fn delete_comment(&self, comment_id: u64) -> Result<(), RequestError> {
        let request = build_delete_comment(self.base_url(), comment_id);
        with_diagnostics("failed to delete comment", async {
            self.dispatch(request).await?;
            Ok(())
        })
        .await
    }
}

fn build_comments_by_post(base_url: &str, post_id: u64) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url: format!("{base_url}/comments?postId={post_id}"),
        headers: Vec::new(),
        body: None,
    }
}

fn build_create_comment(base_url: &str, input: &NewComment) -> Result<HttpRequest, RequestError> {
    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: format!("{base_url}/comments"),
        headers: json_headers(),
        body: Some(encode_json(input)?),
    })
}

fn build_update_comment(
    base_url: &str,
    comment_id: u64,
    patch: &CommentPatch,
) -> Result<HttpRequest, RequestError> {
    Ok(HttpRequest {
        method: HttpMethod::Patch,
        url: format!("{base_url}/comments/{comment_id}"),
        headers: json_headers(),
        body: Some(encode_json(patch)?),
    })
}

fn build_delete_comment(base_url: &str, comment_id: u64) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Delete,
        url: format!("{base_url}/comments/{comment_id}"),
        headers: Vec::new(),
        body: None,
    }
}

//! Accessor operations for the `/posts` resource.

use crate::client::{decode_json, encode_json, json_headers, with_diagnostics};
use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{NewPost, Post, PostPatch};
use crate::ApiClient;

impl ApiClient {
    /// Fetch every post.
    pub async fn get_posts(&self) -> Result<Vec<Post>, RequestError> {
        let request = build_list_posts(self.base_url());
        with_diagnostics("failed to fetch posts", async {
            let response = self.dispatch(request).await?;
            decode_json(&response.body)
        })
        .await
    }

    /// Fetch the posts owned by `user_id`. An empty result is not an error.
    pub async fn get_posts_by_user_id(&self, user_id: u64) -> Result<Vec<Post>, RequestError> {
        let request = build_posts_by_user(self.base_url(), user_id);
        with_diagnostics("failed to fetch user posts", async {
            let response = self.dispatch(request).await?;
            decode_json(&response.body)
        })
        .await
    }

    /// Create a post owned by `user_id`; returns the server-assigned record.
    pub async fn create_post(
        &self,
        user_id: u64,
        title: &str,
        body: &str,
    ) -> Result<Post, RequestError> {
        let input = NewPost {
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        };
        with_diagnostics("failed to create post", async {
            let request = build_create_post(self.base_url(), &input)?;
            let response = self.dispatch(request).await?;
            decode_json(&response.body)
        })
        .await
    }

    /// Apply `patch` to the post `post_id`; only `Some` fields change.
    /// Returns the full updated post.
    pub async fn update_post(
        &self,
        post_id: u64,
        patch: &PostPatch,
    ) -> Result<Post, RequestError> {
        with_diagnostics("failed to update post", async {
            let request = build_update_post(self.base_url(), post_id, patch)?;
            let response = self.dispatch(request).await?;
            decode_json(&response.body)
        })
        .await
    }

    /// Delete the post `post_id`.
    pub async fn delete_post(&self, post_id: u64) -> Result<(), RequestError> {
        let request = build_delete_post(self.base_url(), post_id);
        with_diagnostics("failed to delete post", async {
            self.dispatch(request).await?;
            Ok(())
        })
        .await
    }
}

fn build_list_posts(base_url: &str) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url: format!("{base_url}/posts"),
        headers: Vec::new(),
        body: None,
    }
}

fn build_posts_by_user(base_url: &str, user_id: u64) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url: format!("{base_url}/posts?userId={user_id}"),
        headers: Vec::new(),
        body: None,
    }
}

fn build_create_post(base_url: &str, input: &NewPost) -> Result<HttpRequest, RequestError> {
    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: format!("{base_url}/posts"),
        headers: json_headers(),
        body: Some(encode_json(input)?),
    })
}

fn build_update_post(
    base_url: &str,
    post_id: u64,
    patch: &PostPatch,
) -> Result<HttpRequest, RequestError> {
    Ok(HttpRequest {
        method: HttpMethod::Patch,
        url: format!("{base_url}/posts/{post_id}"),
        headers: json_headers(),
        body: Some(encode_json(patch)?),
    })
}

fn build_delete_post(base_url: &str, post_id: u64) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Delete,
        url: format!("{base_url}/posts/{post_id}"),
        headers: Vec::new(),
        body: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::stub::{client_over, StubTransport};

    const BASE_URL: &str = "http://localhost:3000";

    #[test]
    fn build_list_posts_produces_correct_request() {
        let req = build_list_posts(BASE_URL);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/posts");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_posts_by_user_adds_query_string() {
        let req = build_posts_by_user(BASE_URL, 7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/posts?userId=7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_post_serializes_payload() {
        let input = NewPost {
            user_id: 1,
            title: "T".to_string(),
            body: "B".to_string(),
        };
        let req = build_create_post(BASE_URL, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/posts");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userId"], 1);
        assert_eq!(body["title"], "T");
        assert_eq!(body["body"], "B");
    }

    #[test]
    fn build_update_post_omits_unset_fields() {
        let patch = PostPatch {
            title: Some("X".to_string()),
            ..PostPatch::default()
        };
        let req = build_update_post(BASE_URL, 5, &patch).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "http://localhost:3000/posts/5");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "X");
        assert!(body.get("body").is_none());
        assert!(body.get("userId").is_none());
    }

    #[test]
    fn build_delete_post_produces_correct_request() {
        let req = build_delete_post(BASE_URL, 9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/posts/9");
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn get_posts_decodes_response() {
        let transport = StubTransport::replying(
            200,
            r#"[{"id":1,"userId":2,"title":"Hello","body":"World"}]"#,
        );
        let posts = client_over(transport.clone()).get_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_id, 2);
        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url, "http://localhost:3000/posts");
    }

    #[tokio::test]
    async fn delete_post_resolves_to_unit() {
        let client = client_over(StubTransport::replying(204, ""));
        client.delete_post(9).await.unwrap();
    }

    #[tokio::test]
    async fn server_error_surfaces_as_status() {
        let client = client_over(StubTransport::replying(500, "internal error"));
        let err = client.get_posts().await.unwrap_err();
        assert!(matches!(err, RequestError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn transport_failure_surfaces_unchanged() {
        let client = client_over(StubTransport::failing("connection reset"));
        let err = client.create_post(1, "T", "B").await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
    }

    #[tokio::test]
    async fn malformed_body_surfaces_as_deserialization() {
        let client = client_over(StubTransport::replying(200, "not json"));
        let err = client.get_posts().await.unwrap_err();
        assert!(matches!(err, RequestError::Deserialization(_)));
    }
}

//! In-memory implementation of the blog API wire contract, used by the
//! integration tests and runnable as a standalone binary.
//!
//! Ids are sequential integers assigned per resource, starting at 1. DTOs
//! are defined independently from the blog-core crate; integration tests
//! catch schema drift between the two.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub user_id: Option<u64>,
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPatch {
    pub post_id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostFilter {
    user_id: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentFilter {
    post_id: Option<u64>,
}

#[derive(Deserialize)]
struct UserFilter {
    email: Option<String>,
}

/// Records for one resource plus the next id to assign.
#[derive(Debug)]
struct Store<T> {
    items: HashMap<u64, T>,
    next_id: u64,
}

impl<T: Clone> Store<T> {
    fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
        }
    }

    fn insert_with_id(&mut self, make: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let item = make(id);
        self.items.insert(id, item.clone());
        item
    }
}

type Db<T> = Arc<RwLock<Store<T>>>;

#[derive(Clone)]
struct AppState {
    posts: Db<Post>,
    comments: Db<Comment>,
    users: Db<User>,
}

pub fn app() -> Router {
    let state = AppState {
        posts: Arc::new(RwLock::new(Store::new())),
        comments: Arc::new(RwLock::new(Store::new())),
        users: Arc::new(RwLock::new(Store::new())),
    };
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", patch(update_post).delete(delete_post))
        .route("/comments", get(list_comments).post(create_comment))
        .route("/comments/{id}", patch(update_comment).delete(delete_comment))
        .route("/users", get(list_users).post(create_user))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(
    State(state): State<AppState>,
    Query(filter): Query<PostFilter>,
) -> Json<Vec<Post>> {
    let store = state.posts.read().await;
    let mut posts: Vec<Post> = store
        .items
        .values()
        .filter(|post| filter.user_id.map_or(true, |user_id| post.user_id == user_id))
        .cloned()
        .collect();
    posts.sort_by_key(|post| post.id);
    Json(posts)
}

async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<NewPost>,
) -> (StatusCode, Json<Post>) {
    let mut store = state.posts.write().await;
    let post = store.insert_with_id(|id| Post {
        id,
        user_id: input.user_id,
        title: input.title,
        body: input.body,
    });
    (StatusCode::CREATED, Json(post))
}

async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<PostPatch>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = state.posts.write().await;
    let post = store.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(user_id) = input.user_id {
        post.user_id = user_id;
    }
    if let Some(title) = input.title {
        post.title = title;
    }
    if let Some(body) = input.body {
        post.body = body;
    }
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = state.posts.write().await;
    store
        .items
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_comments(
    State(state): State<AppState>,
    Query(filter): Query<CommentFilter>,
) -> Json<Vec<Comment>> {
    let store = state.comments.read().await;
    let mut comments: Vec<Comment> = store
        .items
        .values()
        .filter(|comment| filter.post_id.map_or(true, |post_id| comment.post_id == post_id))
        .cloned()
        .collect();
    comments.sort_by_key(|comment| comment.id);
    Json(comments)
}

async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<NewComment>,
) -> (StatusCode, Json<Comment>) {
    let mut store = state.comments.write().await;
    let comment = store.insert_with_id(|id| Comment {
        id,
        post_id: input.post_id,
        name: input.name,
        email: input.email,
        body: input.body,
    });
    (StatusCode::CREATED, Json(comment))
}

async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<CommentPatch>,
) -> Result<Json<Comment>, StatusCode> {
    let mut store = state.comments.write().await;
    let comment = store.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(post_id) = input.post_id {
        comment.post_id = post_id;
    }
    if let Some(name) = input.name {
        comment.name = name;
    }
    if let Some(email) = input.email {
        comment.email = email;
    }
    if let Some(body) = input.body {
        comment.body = body;
    }
    Ok(Json(comment.clone()))
}

async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = state.comments.write().await;
    store
        .items
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Json<Vec<User>> {
    let store = state.users.read().await;
    let mut users: Vec<User> = store
        .items
        .values()
        .filter(|user| filter.email.as_deref().map_or(true, |email| user.email == email))
        .cloned()
        .collect();
    users.sort_by_key(|user| user.id);
    Json(users)
}

async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> (StatusCode, Json<User>) {
    let mut store = state.users.write().await;
    let user = store.insert_with_id(|id| User {
        id,
        name: input.name,
        email: input.email,
        username: input.username,
        phone: input.phone,
        website: input.website,
    });
    (StatusCode::CREATED, Json(user))
}

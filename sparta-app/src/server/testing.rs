use crate::server::{ServerState, routes};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use sparta_common::model::{
    ModelValidationError,
    post::{Post, PostContent},
};
use sparta_db::{PostStore, StorageError};
use std::sync::Arc;
use tower::ServiceExt;

/// A store whose every operation fails, standing in for an unreachable database.
#[derive(Debug)]
pub struct FailingPostStore;

#[async_trait]
impl PostStore for FailingPostStore {
    async fn create_post(&self, _content: &PostContent) -> sparta_db::Result<Post> {
        Err(StorageError::Data(ModelValidationError::MissingId))
    }

    async fn list_posts_by_recency(&self) -> sparta_db::Result<Vec<Post>> {
        Err(StorageError::Data(ModelValidationError::MissingId))
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub fn app(post_store: Arc<dyn PostStore>) -> Router {
    routes().with_state(ServerState::new(post_store).unwrap())
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use crate::server::testing::{app, get_request, json_request, send};
    use axum::http::StatusCode;
    use sparta_db::MemoryPostStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = app(Arc::new(MemoryPostStore::new()));

        let response = send(&app, get_request("/nowhere")).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, "Not found");
    }

    #[tokio::test]
    async fn serves_stylesheet() {
        let app = app(Arc::new(MemoryPostStore::new()));

        let response = send(&app, get_request("/public/styles.css")).await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("font-family"));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let app = app(Arc::new(MemoryPostStore::new()));

        let response = send(&app, json_request("/posts", "{not json")).await;

        assert!(response.status.is_client_error());
        assert_eq!(response.body, "Invalid JSON submission");
    }
}

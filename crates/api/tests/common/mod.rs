#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use marquee_api::config::{LogFormat, ServerConfig};
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_core::movie::{Movie, NewMovie};
use marquee_core::store::{MovieStore, StoreError};
use marquee_core::types::MovieId;
use marquee_db::InMemoryMovieStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over the given store.
///
/// Uses [`build_app_router`], so tests exercise the production middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app(store: Arc<dyn MovieStore>) -> Router {
    build_test_app_with_config(store, &test_config())
}

/// Build the application router with an explicit configuration.
pub fn build_test_app_with_config(store: Arc<dyn MovieStore>, config: &ServerConfig) -> Router {
    build_app_router(AppState { store }, config)
}

/// Router over a fresh, empty in-memory store.
pub fn memory_app() -> Router {
    build_test_app(Arc::new(InMemoryMovieStore::new()))
}

/// Router whose store fails every call.
pub fn failing_app() -> Router {
    build_test_app(Arc::new(FailingStore))
}

/// A store that reports a backend failure for every operation.
pub struct FailingStore;

const FAILURE: &str = "connection refused: secret-host:5432";

#[async_trait]
impl MovieStore for FailingStore {
    async fn insert(&self, _movie: &NewMovie) -> Result<Movie, StoreError> {
        Err(StoreError::backend(FAILURE))
    }

    async fn list(&self, _limit: Option<u32>) -> Result<Vec<Movie>, StoreError> {
        Err(StoreError::backend(FAILURE))
    }

    async fn find_by_id(&self, _id: MovieId) -> Result<Option<Movie>, StoreError> {
        Err(StoreError::backend(FAILURE))
    }

    async fn replace(&self, _id: MovieId, _movie: &NewMovie) -> Result<Option<Movie>, StoreError> {
        Err(StoreError::backend(FAILURE))
    }

    async fn delete(&self, _id: MovieId) -> Result<bool, StoreError> {
        Err(StoreError::backend(FAILURE))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::backend(FAILURE))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a movie through the API and return its JSON record.
pub async fn create_movie(app: &Router, moviename: &str, description: &str, image: &str) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/movie",
        serde_json::json!({
            "moviename": moviename,
            "description": description,
            "image": image,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

#![allow(dead_code)]
/// Common test utilities for HBNB integration tests
///
/// This file contains the test application setup, request helpers, and
/// seeding helpers shared by all integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use hbnb::{
    create_app,
    db::{init_pool, DbPool},
    models::{City, User},
    repo, run_migrations,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Creates a test application backed by its own in-memory SQLite database
///
/// The shared-cache URI is unique per call, so every pooled connection sees
/// the migrated schema and tests stay isolated from each other.
///
/// ### Returns
///
/// The router and the pool behind it, for seeding data directly
pub fn create_test_app() -> (Router, Arc<DbPool>) {
    let database_url = format!("file:it_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    let pool = Arc::new(init_pool(&database_url).unwrap());

    let mut conn = pool.get().unwrap();
    run_migrations(&mut conn).unwrap();
    drop(conn);

    (create_app(pool.clone()), pool)
}

/// Sends a request with an optional JSON body and returns the status and
/// decoded JSON response
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

/// Sends a prebuilt request and returns the status and decoded JSON response
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Seeds a city directly through the repository
pub async fn seed_city(pool: &DbPool, name: &str) -> City {
    repo::create_city(pool, name.to_string()).await.unwrap()
}

/// Seeds a user directly through the repository
pub async fn seed_user(pool: &DbPool, email: &str) -> User {
    repo::create_user(pool, email.to_string(), None, None).await.unwrap()
}

/// Creates a place through the API and returns its JSON
pub async fn create_place(app: &Router, city_id: &str, body: Value) -> Value {
    let (status, place) = send(app, "POST", &format!("/cities/{}/places", city_id), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected response: {}", place);
    place
}

/// Creates a review through the API and returns its JSON
pub async fn create_review(app: &Router, place_id: &str, body: Value) -> Value {
    let (status, review) = send(app, "POST", &format!("/places/{}/reviews", place_id), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected response: {}", review);
    review
}

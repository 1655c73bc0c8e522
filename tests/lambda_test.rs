mod common;

use std::sync::Arc;

use environments_api::handlers::function_handler;
use environments_api::repositories::InMemoryEnvironmentRepository;
use environments_api::state::AppState;
use lambda_http::http::{self, StatusCode};
use lambda_http::{Body, Request};
use serde_json::{json, Value};

use common::FailingEnvironmentStore;

fn event(body: impl Into<Body>) -> Request {
    http::Request::builder()
        .method("POST")
        .uri("/environments")
        .body(body.into())
        .unwrap()
}

fn in_memory_state() -> (AppState, InMemoryEnvironmentRepository) {
    let store = InMemoryEnvironmentRepository::new();
    let state = AppState::with_store(Arc::new(store.clone()));
    (state, store)
}

fn body_json(body: &Body) -> Value {
    serde_json::from_slice(body.as_ref()).unwrap()
}

#[tokio::test]
async fn test_lambda_create_environment() {
    let (state, store) = in_memory_state();
    let payload = json!({ "name": "production", "tags": ["critical"] }).to_string();

    let response = function_handler(&state, event(payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );

    let body = body_json(response.body());
    assert_eq!(body["name"], json!("production"));
    assert_eq!(body["tags"], json!(["critical"]));
    assert_eq!(body["isPrivate"], json!(false));
    assert_eq!(body["createdAt"], body["updatedAt"]);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_lambda_is_private_ignored() {
    let (state, _store) = in_memory_state();
    let payload = json!({ "name": "valid-name", "isPrivate": true }).to_string();

    let response = function_handler(&state, event(payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.body())["isPrivate"], json!(false));
}

#[tokio::test]
async fn test_lambda_validation_error() {
    let (state, store) = in_memory_state();

    let response = function_handler(&state, event(r#"{"name":"ab"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
    assert_eq!(
        body_json(response.body()),
        json!({
            "message": "Validation Error: \"name\" is required and must be a \"string\" between 3 and 32"
        })
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_lambda_tags_validation_error() {
    let (state, _store) = in_memory_state();
    let payload = json!({ "name": "valid-name", "tags": "not-an-array" }).to_string();

    let response = function_handler(&state, event(payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response.body())["message"],
        json!("Validation Error: \"tags\" is optional but must be an \"array\"")
    );
}

#[tokio::test]
async fn test_lambda_storage_failure_is_fault() {
    let state = AppState::with_store(Arc::new(FailingEnvironmentStore));

    let err = function_handler(&state, event(r#"{"name":"staging"}"#))
        .await
        .unwrap_err();

    // Generic message only; storage detail stays in the logs
    assert_eq!(err.to_string(), "Couldn't create the environment item.");
}

#[tokio::test]
async fn test_lambda_unparseable_body_is_fault() {
    let (state, store) = in_memory_state();

    for body in [Body::Empty, Body::from("not json"), Body::from("null")] {
        let result = function_handler(&state, event(body)).await;
        assert!(result.is_err());
    }
    assert!(store.is_empty().await);
}

//! Handler tests for the Accounts domain
//!
//! These drive the accounts router directly with `oneshot`, covering
//! status codes, JSON bodies and the plaintext error bodies.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_accounts::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

fn app_with_store(store: InMemoryAccountStore) -> Router {
    let service =
        AccountService::with_strategies(store, Arc::new(Sha256Hasher), Arc::new(RandomTokenIssuer));
    handlers::router(service)
}

fn app() -> Router {
    app_with_store(InMemoryAccountStore::new())
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

async fn body_text(body: Body) -> String {
    String::from_utf8(body_bytes(body).await).unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    serde_json::from_slice(&body_bytes(body).await).unwrap()
}

fn add_user_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/addUser")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_add_user_returns_username_and_token() {
    let response = app()
        .oneshot(add_user_request(json!({"username": "alice", "password": "secret1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["username"], "alice");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert!(body.get("password").is_none());
    assert!(body.get("credential_digest").is_none());
}

#[tokio::test]
async fn test_add_user_rejects_invalid_username() {
    let response = app()
        .oneshot(add_user_request(json!({"username": "al ice", "password": "secret1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "Invalid username format");
}

#[tokio::test]
async fn test_add_user_rejects_short_password() {
    let response = app()
        .oneshot(add_user_request(json!({"username": "alice", "password": "ab"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "Invalid password format");
}

#[tokio::test]
async fn test_add_user_missing_fields_fail_validation() {
    let response = app().oneshot(add_user_request(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "Invalid username format");
}

#[tokio::test]
async fn test_add_user_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/addUser")
        .header("content-type", "application/json")
        .body(Body::from("{\"username\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!body_text(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_add_user_without_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/addUser")
        .body(Body::from(r#"{"username":"alice","password":"secret1"}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_activate_unknown_user_is_404() {
    let response = app().oneshot(put_request("/activateUser/ghost")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response.into_body()).await, "User not found");
}

#[tokio::test]
async fn test_deactivate_unknown_user_is_404() {
    let response = app()
        .oneshot(put_request("/deactivateUser/ghost"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_unknown_user_is_200() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/removeUser/ghost")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_full_lifecycle() {
    let store = InMemoryAccountStore::new();
    let app = app_with_store(store.clone());

    let response = app
        .clone()
        .oneshot(add_user_request(json!({"username": "alice", "password": "secret1"})))
        .await
        .unwrap();
    let created: AccountResponse = json_body(response.into_body()).await;

    // deactivate: 200, empty body, token cleared
    let response = app
        .clone()
        .oneshot(put_request("/deactivateUser/alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response.into_body()).await.is_empty());
    assert!(!store.get("alice").await.unwrap().unwrap().is_active());

    // activate: new token
    let response = app
        .clone()
        .oneshot(put_request("/activateUser/alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let activated: AccountResponse = json_body(response.into_body()).await;
    assert_eq!(activated.username, "alice");
    assert_ne!(activated.token, created.token);
    assert_eq!(
        store.get("alice").await.unwrap().unwrap().active_token,
        Some(activated.token.clone())
    );

    // remove, then activate is 404
    let request = Request::builder()
        .method("DELETE")
        .uri("/removeUser/alice")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(store.get("alice").await.unwrap().is_none());

    let response = app.oneshot(put_request("/activateUser/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let request = Request::builder()
        .method("GET")
        .uri("/activateUser/alice")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

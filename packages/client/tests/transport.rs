//! Wire-level behaviour of the HTTP transport against a loopback panel.

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{any, get, post};
use axum::{Json, Router};
use sarban::api::QueryParams;
use sarban::error::{codes, messages};
use sarban::{ClientConfig, PanelClient, PanelError, PanelRequest};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use common::{client_for, echo, logged_in, spawn_panel, with_login, PASSWORD, TOKEN, USERNAME};

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_over_http() {
    let address = spawn_panel(with_login(Router::new())).await;
    let mut client = client_for(&address);

    assert_eq!(client.login(USERNAME, PASSWORD).await, Ok(true));
    assert_eq!(client.session().token(), Some(TOKEN));

    let err = client.login(USERNAME, PASSWORD).await.unwrap_err();
    assert_eq!(err.code(), codes::ALREADY_LOGIN);
}

#[tokio::test]
async fn wrong_password_is_bad_login() {
    let address = spawn_panel(with_login(Router::new())).await;
    let mut client = client_for(&address);

    let err = client.login(USERNAME, "nope").await.unwrap_err();
    assert_eq!(err, PanelError::bad_login());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn login_body_is_form_encoded() {
    let seen: Arc<Mutex<Vec<(Option<String>, String)>>> = Arc::default();
    let recorder = Arc::clone(&seen);
    let app = Router::new().route(
        "/api/admin/token",
        post(move |headers: HeaderMap, body: String| {
            let recorder = Arc::clone(&recorder);
            async move {
                let content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                recorder.lock().unwrap().push((content_type, body));
                Json(json!({ "access_token": "t" }))
            }
        }),
    );
    let address = spawn_panel(app).await;

    let mut client = client_for(&address);
    client.login("a b", "p&w").await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("application/x-www-form-urlencoded"));
    assert_eq!(
        seen[0].1,
        "grant_type=&username=a%20b&password=p%26w&scope=&client_id=&client_secret="
    );
}

// ---------------------------------------------------------------------------
// Encoding modes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_sends_query_and_no_body() {
    let client = logged_in(Router::new().route("/api/users", any(echo))).await;

    let params = QueryParams::new().with("limit", 10).with("status", "active");
    let seen = client
        .request(PanelRequest::get("users").query(params))
        .await
        .unwrap();

    assert_eq!(seen["method"], "GET");
    assert_eq!(seen["query"], "limit=10&status=active");
    assert_eq!(seen["body"], "");
    assert_eq!(seen["authorization"], format!("Bearer {TOKEN}"));
}

#[tokio::test]
async fn put_sends_json() {
    let client = logged_in(Router::new().route("/api/user/{username}", any(echo))).await;

    let seen = client
        .request(PanelRequest::put("user/alice").json(&json!({ "note": "vip" })).unwrap())
        .await
        .unwrap();

    assert_eq!(seen["method"], "PUT");
    assert_eq!(seen["content_type"], "application/json");
    let body: Value = serde_json::from_str(seen["body"].as_str().unwrap()).unwrap();
    assert_eq!(body, json!({ "note": "vip" }));
}

#[tokio::test]
async fn delete_sends_query_and_no_body() {
    let client = logged_in(Router::new().route("/api/users/expired", any(echo))).await;

    // A body attached to a DELETE is not sent.
    let request = PanelRequest::delete("users/expired")
        .query(QueryParams::new().with("expired_before", "2024-01-01T00:00:00Z"))
        .json(&json!({ "ignored": true }))
        .unwrap();
    let seen = client.request(request).await.unwrap();

    assert_eq!(seen["method"], "DELETE");
    assert_eq!(seen["query"], "expired_before=2024-01-01T00%3A00%3A00Z");
    assert_eq!(seen["body"], "");
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_panel_is_status_zero() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);

    let mut client = client_for(&address);
    let err = client.login(USERNAME, PASSWORD).await.unwrap_err();
    assert!(err.is_transport(), "{err:?}");
    assert_eq!(err.status(), Some(0));
    assert_eq!(err.code(), codes::HTTP_ERROR);
}

#[tokio::test]
async fn slow_panel_times_out_as_status_zero() {
    let router = Router::new().route(
        "/api/admin/token",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "access_token": TOKEN, "token_type": "bearer" }))
        }),
    );
    let address = spawn_panel(router).await;
    let config = ClientConfig::new(&address)
        .with_https(false)
        .with_timeout(Duration::from_millis(200));
    let mut client = PanelClient::new(&config).unwrap();

    let err = client.login(USERNAME, PASSWORD).await.unwrap_err();
    assert!(err.is_transport(), "{err:?}");
    assert_eq!(err.status(), Some(0));
    assert!(err.message().starts_with("Request failed: "), "{err:?}");
    assert_eq!(client.session().token(), None);
}

#[tokio::test]
async fn error_statuses_over_http() {
    let app = Router::new()
        .route(
            "/api/user/{username}",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "detail": "User not found" }))) }),
        )
        .route(
            "/api/admin",
            get(|| async { (StatusCode::FORBIDDEN, "<html>nope</html>") }),
        )
        .route(
            "/api/system",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
    let client = logged_in(app).await;

    let err = client.request(PanelRequest::get("user/ghost")).await.unwrap_err();
    assert_eq!(err, PanelError::NotFound("User not found".into()));

    let err = client.request(PanelRequest::get("admin")).await.unwrap_err();
    assert_eq!(err, PanelError::Forbidden(messages::FORBIDDEN.into()));

    let err = client.request(PanelRequest::get("system")).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.message(), "HTTP 502 error occurred");
}

#[tokio::test]
async fn text_success_is_empty_object() {
    let app = Router::new().route("/api/core/restart", post(|| async { "restarted" }));
    let client = logged_in(app).await;

    let value = client.request(PanelRequest::post("core/restart")).await.unwrap();
    assert_eq!(value, json!({}));
}

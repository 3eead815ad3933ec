//! Loopback panel servers for integration tests.
//!
//! Each test builds an `axum` router with the routes it needs, and
//! [`spawn_panel`] serves it on an ephemeral port (real TCP, real HTTP).

#![allow(dead_code)]

use std::collections::HashMap;

use axum::extract::RawQuery;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::routing::post;
use axum::{Form, Json, Router};
use sarban::{ClientConfig, PanelClient};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "test-token";

/// Serve `router` on `127.0.0.1:0` and return its `host:port`.
pub async fn spawn_panel(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr.to_string()
}

/// A plain-HTTP client for a panel spawned by [`spawn_panel`].
pub fn client_for(address: &str) -> PanelClient {
    PanelClient::new(&ClientConfig::new(address).with_https(false)).unwrap()
}

/// `POST /api/admin/token` accepting [`USERNAME`] / [`PASSWORD`].
pub fn with_login(router: Router) -> Router {
    router.route("/api/admin/token", post(token))
}

async fn token(Form(form): Form<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    let ok = form.get("username").map(String::as_str) == Some(USERNAME)
        && form.get("password").map(String::as_str) == Some(PASSWORD);
    if ok {
        (
            StatusCode::OK,
            Json(json!({ "access_token": TOKEN, "token_type": "bearer" })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect username or password" })),
        )
    }
}

/// Spawn `router` (plus the login route) and return a logged-in client.
pub async fn logged_in(router: Router) -> PanelClient {
    let address = spawn_panel(with_login(router)).await;
    let mut client = client_for(&address);
    assert!(client.login(USERNAME, PASSWORD).await.unwrap());
    client
}

/// Handler that reflects the request back as JSON.
///
/// ```json
/// { "method": "GET", "query": "limit=10", "content_type": null,
///   "authorization": "Bearer test-token", "body": "" }
/// ```
pub async fn echo(method: Method, headers: HeaderMap, RawQuery(query): RawQuery, body: String) -> Json<Value> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
    Json(json!({
        "method": method.as_str(),
        "query": query,
        "content_type": header("content-type"),
        "authorization": header("authorization"),
        "user_agent": header("user-agent"),
        "body": body,
    }))
}

/// Reject requests whose bearer token is not [`TOKEN`], as the panel would.
pub fn authorized(headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    let expected = format!("Bearer {TOKEN}");
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Could not validate credentials" })),
        )),
    }
}

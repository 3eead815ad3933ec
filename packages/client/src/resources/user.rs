//! Users (the panel's proxy clients).
//!
//! | Function | Endpoint |
//! |----------|----------|
//! | [`get_user`] | `GET /api/user/{username}` |
//! | [`add_user`] | `POST /api/user` |
//! | [`modify_user`] | `PUT /api/user/{username}` |
//! | [`remove_user`] | `DELETE /api/user/{username}` |
//! | [`list_users`] | `GET /api/users` |
//! | [`reset_user_usage`] | `POST /api/user/{username}/reset` |
//! | [`revoke_subscription`] | `POST /api/user/{username}/revoke_sub` |
//! | [`activate_next_plan`] | `POST /api/user/{username}/active-next` |
//! | [`user_usage`] | `GET /api/user/{username}/usage` |
//! | [`set_owner`] | `PUT /api/user/{username}/set-owner` |
//! | [`expired_users`] | `GET /api/users/expired` |
//! | [`delete_expired_users`] | `DELETE /api/users/expired` |
//! | [`reset_all_users_usage`] | `POST /api/users/reset` |

use sarban_api::{
    ExpiredRange, QueryParams, ToQuery, UsageRange, User, UserCreate, UserListQuery, UserModify,
    UserUsagesResponse, UsersResponse,
};

use super::segment;
use crate::client::PanelClient;
use crate::error::PanelError;
use crate::transport::PanelRequest;

fn user_path(username: &str, rest: &str) -> String {
    format!("user/{}{rest}", segment(username))
}

pub async fn get_user(client: &PanelClient, username: &str) -> Result<User, PanelError> {
    client.fetch(PanelRequest::get(user_path(username, ""))).await
}

/// Create a user.
///
/// [`UserCreate::vless`] builds the usual body: an active, unlimited,
/// never-expiring VLESS user with the `xtls-rprx-vision` flow.
pub async fn add_user(client: &PanelClient, user: &UserCreate) -> Result<User, PanelError> {
    client.fetch(PanelRequest::post("user").json(user)?).await
}

/// Change a user. Fields left `None` in `changes` are not sent.
pub async fn modify_user(
    client: &PanelClient,
    username: &str,
    changes: &UserModify,
) -> Result<User, PanelError> {
    client
        .fetch(PanelRequest::put(user_path(username, "")).json(changes)?)
        .await
}

pub async fn remove_user(client: &PanelClient, username: &str) -> Result<bool, PanelError> {
    client
        .execute(PanelRequest::delete(user_path(username, "")))
        .await
}

pub async fn list_users(
    client: &PanelClient,
    query: &UserListQuery,
) -> Result<UsersResponse, PanelError> {
    client
        .fetch(PanelRequest::get("users").query(query.to_query()))
        .await
}

/// Zero the user's traffic counter.
pub async fn reset_user_usage(client: &PanelClient, username: &str) -> Result<User, PanelError> {
    client
        .fetch(PanelRequest::post(user_path(username, "/reset")))
        .await
}

/// Issue a new subscription token; old subscription links stop working.
pub async fn revoke_subscription(client: &PanelClient, username: &str) -> Result<User, PanelError> {
    client
        .fetch(PanelRequest::post(user_path(username, "/revoke_sub")))
        .await
}

pub async fn activate_next_plan(client: &PanelClient, username: &str) -> Result<User, PanelError> {
    client
        .fetch(PanelRequest::post(user_path(username, "/active-next")))
        .await
}

/// Per-node traffic for one user over `range`.
pub async fn user_usage(
    client: &PanelClient,
    username: &str,
    range: &UsageRange,
) -> Result<UserUsagesResponse, PanelError> {
    client
        .fetch(PanelRequest::get(user_path(username, "/usage")).query(range.to_query()))
        .await
}

/// Move a user to another admin.
pub async fn set_owner(
    client: &PanelClient,
    username: &str,
    admin_username: &str,
) -> Result<User, PanelError> {
    let params = QueryParams::new().with("admin_username", admin_username);
    client
        .fetch(PanelRequest::put(user_path(username, "/set-owner")).query(params))
        .await
}

/// Usernames of users that expired inside `range`.
pub async fn expired_users(
    client: &PanelClient,
    range: &ExpiredRange,
) -> Result<Vec<String>, PanelError> {
    client
        .fetch(PanelRequest::get("users/expired").query(range.to_query()))
        .await
}

/// Delete users that expired inside `range`; returns the removed usernames.
pub async fn delete_expired_users(
    client: &PanelClient,
    range: &ExpiredRange,
) -> Result<Vec<String>, PanelError> {
    client
        .fetch(PanelRequest::delete("users/expired").query(range.to_query()))
        .await
}

pub async fn reset_all_users_usage(client: &PanelClient) -> Result<bool, PanelError> {
    client.execute(PanelRequest::post("users/reset")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;
    use crate::resources::test_support::{anonymous, logged_in};
    use crate::transport::{Body, Method, RawResponse};
    use sarban_api::UserStatus;
    use serde_json::json;

    fn user_json(username: &str) -> serde_json::Value {
        json!({
            "username": username,
            "status": "active",
            "proxies": { "vless": { "flow": "xtls-rprx-vision" } },
            "inbounds": { "vless": ["VLESS TCP"] },
            "used_traffic": 0,
            "online_at": null
        })
    }

    #[tokio::test]
    async fn add_user_posts_vless_defaults() {
        let (client, mock) = logged_in();
        mock.respond(200, user_json("alice"));

        let user = add_user(&client, &UserCreate::vless("alice", vec!["VLESS TCP".into()]))
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
        assert!(user.extra.contains_key("online_at"));

        let req = mock.last_request().unwrap();
        let Some(Body::Json(body)) = req.body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body["data_limit_reset_strategy"], "no_reset");
        assert_eq!(body["status"], "active");
        assert_eq!(body["proxies"]["vless"]["flow"], "xtls-rprx-vision");
    }

    #[tokio::test]
    async fn modify_sends_only_set_fields() {
        let (client, mock) = logged_in();
        mock.respond(200, user_json("alice"));
        let changes = UserModify::default().with_status(UserStatus::Disabled);
        modify_user(&client, "alice", &changes).await.unwrap();

        let req = mock.last_request().unwrap();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.path, "user/alice");
        assert_eq!(req.body, Some(Body::Json(json!({ "status": "disabled" }))));
    }

    #[tokio::test]
    async fn list_repeats_username_filter() {
        let (client, mock) = logged_in();
        mock.respond(200, json!({ "users": [user_json("a"), user_json("b")], "total": 2 }));
        let query = UserListQuery {
            usernames: vec!["a".into(), "b".into()],
            status: Some(UserStatus::Active),
            ..Default::default()
        };
        let page = list_users(&client, &query).await.unwrap();
        assert_eq!(page.total, 2);

        let req = mock.last_request().unwrap();
        assert_eq!(req.body, None);
        let pairs: Vec<(&str, &str)> = req
            .params
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("username", "a"), ("username", "b"), ("status", "active")]
        );
    }

    #[tokio::test]
    async fn set_owner_puts_query_without_body() {
        let (client, mock) = logged_in();
        mock.respond(200, user_json("alice"));
        set_owner(&client, "alice", "reseller").await.unwrap();

        let req = mock.last_request().unwrap();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.path, "user/alice/set-owner");
        assert_eq!(req.params.get("admin_username"), Some("reseller"));
        assert_eq!(req.body, None);
    }

    #[tokio::test]
    async fn usernames_are_path_encoded() {
        let (client, mock) = logged_in();
        mock.respond(200, json!({}));
        remove_user(&client, "a/b c").await.unwrap();
        assert_eq!(mock.last_request().unwrap().path, "user/a%2Fb%20c");
    }

    #[tokio::test]
    async fn not_found_carries_panel_detail() {
        let (client, mock) = logged_in();
        mock.respond(404, json!({ "detail": "User not found" }));
        let err = get_user(&client, "ghost").await.unwrap_err();
        assert_eq!(err, PanelError::NotFound("User not found".into()));
    }

    #[tokio::test]
    async fn anonymous_client_is_rejected_locally() {
        let (client, mock) = anonymous();
        let err = reset_all_users_usage(&client).await.unwrap_err();
        assert_eq!(err.code(), codes::UNAUTHORIZED);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn text_success_is_a_decode_error() {
        let (client, mock) = logged_in();
        mock.push(RawResponse::text(200, "ok"));

        let err = get_user(&client, "alice").await.unwrap_err();
        assert_eq!(err.code(), codes::DECODE_ERROR);
        assert!(!err.is_transport());

        // The untyped path still sees the fallback value.
        mock.push(RawResponse::text(200, "ok"));
        let raw = client
            .request(PanelRequest::get(user_path("alice", "")))
            .await
            .unwrap();
        assert_eq!(raw, json!({}));
    }
}

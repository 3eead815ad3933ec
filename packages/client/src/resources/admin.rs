//! Admin accounts.
//!
//! | Function | Endpoint |
//! |----------|----------|
//! | [`current_admin`] | `GET /api/admin` |
//! | [`create_admin`] | `POST /api/admin` |
//! | [`modify_admin`] | `PUT /api/admin/{username}` |
//! | [`remove_admin`] | `DELETE /api/admin/{username}` |
//! | [`list_admins`] | `GET /api/admins` |
//! | [`disable_all_active_users`] | `POST /api/admin/{username}/users/disable` |
//! | [`activate_all_disabled_users`] | `POST /api/admin/{username}/users/activate` |
//! | [`reset_admin_usage`] | `POST /api/admin/usage/reset/{username}` |
//! | [`admin_usage`] | `GET /api/admin/usage/{username}` |

use sarban_api::{Admin, AdminCreate, AdminListQuery, AdminModify, ToQuery};

use super::segment;
use crate::client::PanelClient;
use crate::error::PanelError;
use crate::transport::PanelRequest;

/// The admin the client is logged in as.
pub async fn current_admin(client: &PanelClient) -> Result<Admin, PanelError> {
    client.fetch(PanelRequest::get("admin")).await
}

/// Create an admin. Requires a sudo admin.
pub async fn create_admin(client: &PanelClient, admin: &AdminCreate) -> Result<Admin, PanelError> {
    client.fetch(PanelRequest::post("admin").json(admin)?).await
}

pub async fn modify_admin(
    client: &PanelClient,
    username: &str,
    changes: &AdminModify,
) -> Result<Admin, PanelError> {
    let path = format!("admin/{}", segment(username));
    client.fetch(PanelRequest::put(path).json(changes)?).await
}

pub async fn remove_admin(client: &PanelClient, username: &str) -> Result<bool, PanelError> {
    let path = format!("admin/{}", segment(username));
    client.execute(PanelRequest::delete(path)).await
}

pub async fn list_admins(
    client: &PanelClient,
    query: &AdminListQuery,
) -> Result<Vec<Admin>, PanelError> {
    client
        .fetch(PanelRequest::get("admins").query(query.to_query()))
        .await
}

/// Disable every active user owned by `username`.
pub async fn disable_all_active_users(
    client: &PanelClient,
    username: &str,
) -> Result<bool, PanelError> {
    let path = format!("admin/{}/users/disable", segment(username));
    client.execute(PanelRequest::post(path)).await
}

/// Re-activate every disabled user owned by `username`.
pub async fn activate_all_disabled_users(
    client: &PanelClient,
    username: &str,
) -> Result<bool, PanelError> {
    let path = format!("admin/{}/users/activate", segment(username));
    client.execute(PanelRequest::post(path)).await
}

pub async fn reset_admin_usage(client: &PanelClient, username: &str) -> Result<Admin, PanelError> {
    let path = format!("admin/usage/reset/{}", segment(username));
    client.fetch(PanelRequest::post(path)).await
}

/// Total traffic used by an admin's users, in bytes.
pub async fn admin_usage(client: &PanelClient, username: &str) -> Result<i64, PanelError> {
    let path = format!("admin/usage/{}", segment(username));
    client.fetch(PanelRequest::get(path)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::test_support::logged_in;
    use crate::transport::{Body, Method};
    use serde_json::json;

    #[tokio::test]
    async fn create_sends_json_body() {
        let (client, mock) = logged_in();
        mock.respond(200, json!({ "username": "ops", "is_sudo": false }));

        let admin = create_admin(&client, &AdminCreate::new("ops", "pw")).await.unwrap();
        assert_eq!(admin.username, "ops");

        let req = mock.last_request().unwrap();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "admin");
        assert_eq!(
            req.body,
            Some(Body::Json(json!({ "username": "ops", "password": "pw", "is_sudo": false })))
        );
    }

    #[tokio::test]
    async fn list_sends_only_set_filters() {
        let (client, mock) = logged_in();
        mock.respond(200, json!([]));
        let query = AdminListQuery {
            limit: Some(5),
            ..Default::default()
        };
        assert!(list_admins(&client, &query).await.unwrap().is_empty());

        let req = mock.last_request().unwrap();
        assert_eq!(req.path, "admins");
        assert_eq!(req.params.pairs(), &[("limit".to_string(), "5".to_string())]);
    }

    #[tokio::test]
    async fn usage_is_a_bare_number() {
        let (client, mock) = logged_in();
        mock.respond(200, json!(1073741824_i64));
        assert_eq!(admin_usage(&client, "ops").await, Ok(1073741824));
        assert_eq!(mock.last_request().unwrap().path, "admin/usage/ops");
    }
}

//! User templates.
//!
//! | Function | Endpoint |
//! |----------|----------|
//! | [`add_template`] | `POST /api/user_template` |
//! | [`list_templates`] | `GET /api/user_template` |
//! | [`get_template`] | `GET /api/user_template/{id}` |
//! | [`modify_template`] | `PUT /api/user_template/{id}` |
//! | [`remove_template`] | `DELETE /api/user_template/{id}` |

use sarban_api::{PageQuery, ToQuery, UserTemplate, UserTemplateCreate, UserTemplateModify};

use crate::client::PanelClient;
use crate::error::PanelError;
use crate::transport::PanelRequest;

const BASE: &str = "user_template";

pub async fn add_template(
    client: &PanelClient,
    template: &UserTemplateCreate,
) -> Result<UserTemplate, PanelError> {
    client.fetch(PanelRequest::post(BASE).json(template)?).await
}

pub async fn list_templates(
    client: &PanelClient,
    page: &PageQuery,
) -> Result<Vec<UserTemplate>, PanelError> {
    client
        .fetch(PanelRequest::get(BASE).query(page.to_query()))
        .await
}

pub async fn get_template(client: &PanelClient, template_id: i64) -> Result<UserTemplate, PanelError> {
    client
        .fetch(PanelRequest::get(format!("{BASE}/{template_id}")))
        .await
}

pub async fn modify_template(
    client: &PanelClient,
    template_id: i64,
    changes: &UserTemplateModify,
) -> Result<UserTemplate, PanelError> {
    client
        .fetch(PanelRequest::put(format!("{BASE}/{template_id}")).json(changes)?)
        .await
}

pub async fn remove_template(client: &PanelClient, template_id: i64) -> Result<bool, PanelError> {
    client
        .execute(PanelRequest::delete(format!("{BASE}/{template_id}")))
        .await
}

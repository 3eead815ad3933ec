//! The Xray core running on the panel host.

use sarban_api::CoreStats;
use serde_json::Value;

use crate::client::PanelClient;
use crate::error::PanelError;
use crate::transport::PanelRequest;

/// `GET /api/core`
pub async fn core_stats(client: &PanelClient) -> Result<CoreStats, PanelError> {
    client.fetch(PanelRequest::get("core")).await
}

/// `POST /api/core/restart`
pub async fn restart_core(client: &PanelClient) -> Result<bool, PanelError> {
    client.execute(PanelRequest::post("core/restart")).await
}

/// `GET /api/core/config`. The document is returned untouched.
pub async fn core_config(client: &PanelClient) -> Result<Value, PanelError> {
    client.request(PanelRequest::get("core/config")).await
}

/// `PUT /api/core/config`. The panel validates the document and restarts
/// the core with it.
pub async fn modify_core_config(client: &PanelClient, config: &Value) -> Result<Value, PanelError> {
    client
        .request(PanelRequest::put("core/config").json(config)?)
        .await
}

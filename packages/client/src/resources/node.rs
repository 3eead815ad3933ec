//! Nodes.
//!
//! | Function | Endpoint |
//! |----------|----------|
//! | [`node_settings`] | `GET /api/node/settings` |
//! | [`add_node`] | `POST /api/node` |
//! | [`get_node`] | `GET /api/node/{id}` |
//! | [`modify_node`] | `PUT /api/node/{id}` |
//! | [`remove_node`] | `DELETE /api/node/{id}` |
//! | [`list_nodes`] | `GET /api/nodes` |
//! | [`reconnect_node`] | `POST /api/node/{id}/reconnect` |
//! | [`nodes_usage`] | `GET /api/nodes/usage` |

use sarban_api::{Node, NodeCreate, NodeModify, NodeSettings, NodesUsageResponse, ToQuery, UsageRange};

use crate::client::PanelClient;
use crate::error::PanelError;
use crate::transport::PanelRequest;

/// The certificate a new node must be installed with.
pub async fn node_settings(client: &PanelClient) -> Result<NodeSettings, PanelError> {
    client.fetch(PanelRequest::get("node/settings")).await
}

/// Register a node. See [`NodeCreate::new`] for the defaults.
pub async fn add_node(client: &PanelClient, node: &NodeCreate) -> Result<Node, PanelError> {
    client.fetch(PanelRequest::post("node").json(node)?).await
}

pub async fn get_node(client: &PanelClient, node_id: i64) -> Result<Node, PanelError> {
    client.fetch(PanelRequest::get(format!("node/{node_id}"))).await
}

pub async fn modify_node(
    client: &PanelClient,
    node_id: i64,
    changes: &NodeModify,
) -> Result<Node, PanelError> {
    client
        .fetch(PanelRequest::put(format!("node/{node_id}")).json(changes)?)
        .await
}

pub async fn remove_node(client: &PanelClient, node_id: i64) -> Result<bool, PanelError> {
    client
        .execute(PanelRequest::delete(format!("node/{node_id}")))
        .await
}

pub async fn list_nodes(client: &PanelClient) -> Result<Vec<Node>, PanelError> {
    client.fetch(PanelRequest::get("nodes")).await
}

/// Ask the panel to drop and re-establish its connection to a node.
pub async fn reconnect_node(client: &PanelClient, node_id: i64) -> Result<bool, PanelError> {
    client
        .execute(PanelRequest::post(format!("node/{node_id}/reconnect")))
        .await
}

pub async fn nodes_usage(
    client: &PanelClient,
    range: &UsageRange,
) -> Result<NodesUsageResponse, PanelError> {
    client
        .fetch(PanelRequest::get("nodes/usage").query(range.to_query()))
        .await
}

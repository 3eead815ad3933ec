//! Nodes: remote Xray hosts managed by the panel.

use serde::{Deserialize, Serialize};

/// Connection status of a node as reported by the panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Connected,
    Connecting,
    Error,
    Disabled,
}

/// Response body for `GET /api/node/settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeSettings {
    #[serde(default)]
    pub min_node_version: Option<String>,

    /// PEM certificate the node must trust to accept the panel's connection.
    pub certificate: String,
}

/// A node as returned by the panel.
///
/// ```json
/// {
///   "id": 1,
///   "name": "de-1",
///   "address": "203.0.113.7",
///   "port": 62050,
///   "api_port": 62051,
///   "usage_coefficient": 1.0,
///   "xray_version": "1.8.4",
///   "status": "connected",
///   "message": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub port: u16,
    pub api_port: u16,

    #[serde(default = "default_usage_coefficient")]
    pub usage_coefficient: f64,

    #[serde(default)]
    pub xray_version: Option<String>,

    pub status: NodeStatus,

    #[serde(default)]
    pub message: Option<String>,
}

fn default_usage_coefficient() -> f64 {
    1.0
}

/// Request body for `POST /api/node`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeCreate {
    pub name: String,
    pub address: String,
    pub port: u16,
    pub api_port: u16,
    pub usage_coefficient: f64,
    /// Also register the node's address as a proxy host for every inbound.
    pub add_as_new_host: bool,
}

impl NodeCreate {
    pub const DEFAULT_PORT: u16 = 62050;
    pub const DEFAULT_API_PORT: u16 = 62051;

    /// A node on the default ports, coefficient 1.0, added as a new host.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            port: Self::DEFAULT_PORT,
            api_port: Self::DEFAULT_API_PORT,
            usage_coefficient: 1.0,
            add_as_new_host: true,
        }
    }
}

/// Request body for `PUT /api/node/{id}`. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_coefficient: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NodeStatus>,
}

/// Traffic through one node over the requested window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeUsage {
    /// `None` for the master node.
    #[serde(default)]
    pub node_id: Option<i64>,
    pub node_name: String,
    pub uplink: i64,
    pub downlink: i64,
}

/// Response body for `GET /api/nodes/usage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodesUsageResponse {
    pub usages: Vec<NodeUsage>,
}

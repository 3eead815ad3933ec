//! System statistics, inbounds and proxy hosts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response body for `GET /api/system`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemStats {
    pub version: String,
    pub mem_total: u64,
    pub mem_used: u64,
    pub cpu_cores: u32,
    pub cpu_usage: f64,
    pub total_user: u64,

    #[serde(default)]
    pub online_users: u64,

    pub users_active: u64,

    #[serde(default)]
    pub users_on_hold: u64,

    #[serde(default)]
    pub users_disabled: u64,

    #[serde(default)]
    pub users_expired: u64,

    #[serde(default)]
    pub users_limited: u64,

    pub incoming_bandwidth: u64,
    pub outgoing_bandwidth: u64,

    #[serde(default)]
    pub incoming_bandwidth_speed: u64,

    #[serde(default)]
    pub outgoing_bandwidth_speed: u64,
}

/// One inbound from the core configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InboundInfo {
    pub tag: String,
    pub protocol: String,
    pub network: String,
    pub tls: String,

    /// A number, or a string such as `"443,8443"` for multi-port inbounds.
    #[serde(default)]
    pub port: Value,
}

/// Response body for `GET /api/inbounds`: protocol → inbounds.
pub type InboundsByProtocol = BTreeMap<String, Vec<InboundInfo>>;

/// A proxy host entry, as listed under an inbound tag.
///
/// Only the common fields are modelled; TLS and transport tuning knobs are
/// kept verbatim in `extra` so a read-modify-write cycle does not drop them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyHost {
    pub remark: String,
    pub address: String,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub sni: Option<String>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub security: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET`/`PUT /api/hosts`: inbound tag → hosts.
pub type HostsByTag = BTreeMap<String, Vec<ProxyHost>>;

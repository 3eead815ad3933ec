//! Users (proxy clients): creation, modification, listing and usage.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::query::{format_timestamp, QueryParams, ToQuery};

/// One gibibyte. Data limits are given to the panel in bytes.
pub const GIB: i64 = 1024 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle status of a user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Disabled,
    Limited,
    Expired,
    OnHold,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Disabled => "disabled",
            UserStatus::Limited => "limited",
            UserStatus::Expired => "expired",
            UserStatus::OnHold => "on_hold",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "disabled" => Ok(UserStatus::Disabled),
            "limited" => Ok(UserStatus::Limited),
            "expired" => Ok(UserStatus::Expired),
            "on_hold" => Ok(UserStatus::OnHold),
            other => Err(format!("unknown user status {other:?}")),
        }
    }
}

/// When the panel resets a user's traffic counter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DataLimitResetStrategy {
    #[default]
    NoReset,
    Day,
    Week,
    Month,
    Year,
}

// ---------------------------------------------------------------------------
// Proxies / inbounds
// ---------------------------------------------------------------------------

/// Per-protocol proxy settings (`vless`, `vmess`, `trojan`, `shadowsocks`).
///
/// Only `flow` is modelled explicitly; ids, passwords and methods are kept
/// verbatim in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProxySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProxySettings {
    pub fn with_flow(flow: impl Into<String>) -> Self {
        Self {
            flow: Some(flow.into()),
            extra: Map::new(),
        }
    }
}

/// Protocol name → proxy settings.
pub type Proxies = BTreeMap<String, ProxySettings>;

/// Protocol name → inbound tags the user may connect through.
pub type InboundTags = BTreeMap<String, Vec<String>>;

fn vless_proxies(flow: impl Into<String>) -> Proxies {
    BTreeMap::from([("vless".to_string(), ProxySettings::with_flow(flow))])
}

fn vless_inbounds(tags: Vec<String>) -> InboundTags {
    BTreeMap::from([("vless".to_string(), tags)])
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A user as returned by `GET /api/user/{username}` and friends.
///
/// Fields the client does not model are preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub username: String,

    #[serde(default)]
    pub status: UserStatus,

    #[serde(default)]
    pub proxies: Proxies,

    #[serde(default)]
    pub inbounds: InboundTags,

    /// Expiry as a UNIX timestamp. `None` or `0` means never.
    #[serde(default)]
    pub expire: Option<i64>,

    /// Traffic limit in bytes. `None` or `0` means unlimited.
    #[serde(default)]
    pub data_limit: Option<i64>,

    #[serde(default)]
    pub data_limit_reset_strategy: Option<DataLimitResetStrategy>,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub used_traffic: i64,

    #[serde(default)]
    pub lifetime_used_traffic: i64,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub links: Vec<String>,

    #[serde(default)]
    pub subscription_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body for `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub total: u64,
}

// ---------------------------------------------------------------------------
// Create / modify
// ---------------------------------------------------------------------------

/// Request body for `POST /api/user`.
///
/// ```json
/// {
///   "username": "alice",
///   "proxies": { "vless": { "flow": "xtls-rprx-vision" } },
///   "inbounds": { "vless": ["VLESS TCP REALITY"] },
///   "expire": 0,
///   "data_limit": 0,
///   "data_limit_reset_strategy": "no_reset",
///   "status": "active",
///   "note": ""
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCreate {
    pub username: String,
    pub proxies: Proxies,
    pub inbounds: InboundTags,
    pub expire: i64,
    pub data_limit: i64,
    pub data_limit_reset_strategy: DataLimitResetStrategy,
    pub status: UserStatus,
    pub note: String,
}

impl UserCreate {
    pub const DEFAULT_FLOW: &'static str = "xtls-rprx-vision";

    /// An active, unlimited, never-expiring VLESS user on the given inbounds.
    pub fn vless(username: impl Into<String>, inbound_tags: Vec<String>) -> Self {
        Self {
            username: username.into(),
            proxies: vless_proxies(Self::DEFAULT_FLOW),
            inbounds: vless_inbounds(inbound_tags),
            expire: 0,
            data_limit: 0,
            data_limit_reset_strategy: DataLimitResetStrategy::NoReset,
            status: UserStatus::Active,
            note: String::new(),
        }
    }

    pub fn with_flow(mut self, flow: impl Into<String>) -> Self {
        if let Some(vless) = self.proxies.get_mut("vless") {
            vless.flow = Some(flow.into());
        }
        self
    }

    pub fn with_data_limit_gb(mut self, gb: i64) -> Self {
        self.data_limit = gb * GIB;
        self
    }

    pub fn with_expire(mut self, unix_ts: i64) -> Self {
        self.expire = unix_ts;
        self
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Request body for `PUT /api/user/{username}`.
///
/// Only `Some` fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxies: Option<Proxies>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbounds: Option<InboundTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_limit_reset_strategy: Option<DataLimitResetStrategy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl UserModify {
    /// Replace the user's VLESS proxy and inbound assignment.
    pub fn vless(inbound_tags: Vec<String>) -> Self {
        Self {
            proxies: Some(vless_proxies(UserCreate::DEFAULT_FLOW)),
            inbounds: Some(vless_inbounds(inbound_tags)),
            ..Default::default()
        }
    }

    pub fn with_data_limit_gb(mut self, gb: i64) -> Self {
        self.data_limit = Some(gb * GIB);
        self
    }

    pub fn with_expire(mut self, unix_ts: i64) -> Self {
        self.expire = Some(unix_ts);
        self
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/users`.
///
/// `usernames` and `admins` repeat their key once per value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub usernames: Vec<String>,
    pub search: Option<String>,
    pub admins: Vec<String>,
    pub status: Option<UserStatus>,
    /// Sort key, e.g. `"-created_at"`.
    pub sort: Option<String>,
}

impl ToQuery for UserListQuery {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("offset", self.offset)
            .with_opt("limit", self.limit)
            .with_all("username", &self.usernames)
            .with_opt("search", self.search.as_deref())
            .with_all("admin", &self.admins)
            .with_opt("status", self.status)
            .with_opt("sort", self.sort.as_deref())
    }
}

/// Expiry window for `GET`/`DELETE /api/users/expired`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpiredRange {
    pub expired_after: Option<DateTime<Utc>>,
    pub expired_before: Option<DateTime<Utc>>,
}

impl ToQuery for ExpiredRange {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("expired_after", self.expired_after.as_ref().map(format_timestamp))
            .with_opt("expired_before", self.expired_before.as_ref().map(format_timestamp))
    }
}

// ---------------------------------------------------------------------------
// Usage
// ---------------------------------------------------------------------------

/// Traffic a user consumed on one node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUsage {
    /// `None` for the master node.
    #[serde(default)]
    pub node_id: Option<i64>,
    pub node_name: String,
    pub used_traffic: i64,
}

/// Response body for `GET /api/user/{username}/usage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUsagesResponse {
    pub username: String,
    pub usages: Vec<UserUsage>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

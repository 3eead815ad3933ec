//! Subscription surface (`/sub/{token}/...`), reachable without a bearer
//! token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::user::User;

/// Response body for `GET /sub/{token}/info`.
///
/// The panel returns the same shape as the admin-side user view.
pub type SubscriptionInfo = User;

/// Client applications the panel can render a subscription for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClientType {
    #[serde(rename = "sing-box")]
    SingBox,
    #[serde(rename = "clash-meta")]
    ClashMeta,
    #[serde(rename = "clash")]
    Clash,
    #[serde(rename = "outline")]
    Outline,
    #[serde(rename = "v2ray")]
    V2ray,
    #[serde(rename = "v2ray-json")]
    V2rayJson,
}

impl ClientType {
    /// The path segment used in `/sub/{token}/{client_type}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::SingBox => "sing-box",
            ClientType::ClashMeta => "clash-meta",
            ClientType::Clash => "clash",
            ClientType::Outline => "outline",
            ClientType::V2ray => "v2ray",
            ClientType::V2rayJson => "v2ray-json",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sing-box" => Ok(ClientType::SingBox),
            "clash-meta" => Ok(ClientType::ClashMeta),
            "clash" => Ok(ClientType::Clash),
            "outline" => Ok(ClientType::Outline),
            "v2ray" => Ok(ClientType::V2ray),
            "v2ray-json" => Ok(ClientType::V2rayJson),
            other => Err(format!("unknown client type {other:?}")),
        }
    }
}

/// A subscription payload: JSON for some clients (sing-box, v2ray-json),
/// an opaque text document for the rest (base64 link lists, Clash YAML).
#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionContent {
    Json(Value),
    Text(String),
}

impl SubscriptionContent {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            SubscriptionContent::Json(v) => Some(v),
            SubscriptionContent::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SubscriptionContent::Json(_) => None,
            SubscriptionContent::Text(s) => Some(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_type_path_segments() {
        assert_eq!(ClientType::SingBox.as_str(), "sing-box");
        assert_eq!("v2ray-json".parse::<ClientType>(), Ok(ClientType::V2rayJson));
        assert!("wireguard".parse::<ClientType>().is_err());
    }

    #[test]
    fn client_type_serde_matches_path_segment() {
        let json = serde_json::to_string(&ClientType::ClashMeta).unwrap();
        assert_eq!(json, "\"clash-meta\"");
    }
}

//! User templates: presets for new users.

use serde::{Deserialize, Serialize};

use crate::user::InboundTags;

/// A user template as returned by `GET /api/user_template/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserTemplate {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    /// Bytes; `0` means unlimited.
    #[serde(default)]
    pub data_limit: Option<i64>,

    /// Seconds; `0` means never expires.
    #[serde(default)]
    pub expire_duration: Option<i64>,

    #[serde(default)]
    pub username_prefix: Option<String>,

    #[serde(default)]
    pub username_suffix: Option<String>,

    /// Empty means every inbound.
    #[serde(default)]
    pub inbounds: InboundTags,
}

/// Request body for `POST /api/user_template`.
///
/// Every field is optional; only `Some` fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserTemplateCreate {
    /// Up to 64 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_duration: Option<i64>,

    /// 1–20 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_prefix: Option<String>,

    /// 1–20 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbounds: Option<InboundTags>,
}

/// Request body for `PUT /api/user_template/{id}`.
///
/// Same shape as the create body; unset fields are left unchanged.
pub type UserTemplateModify = UserTemplateCreate;

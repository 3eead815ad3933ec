//! Admin accounts and the login token exchange.

use serde::{Deserialize, Serialize};

use crate::query::{QueryParams, ToQuery};

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// Response body for `POST /api/admin/token`.
///
/// ```json
/// { "access_token": "eyJhbGciOi...", "token_type": "bearer" }
/// ```
///
/// Both fields are optional here so that a 200 response without a token can
/// be told apart from a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub token_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// An admin account as returned by the panel.
///
/// ```json
/// {
///   "username": "root",
///   "is_sudo": true,
///   "telegram_id": null,
///   "discord_webhook": null,
///   "users_usage": 1073741824
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Admin {
    pub username: String,

    #[serde(default)]
    pub is_sudo: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_webhook: Option<String>,

    /// Total traffic used by this admin's users, in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_usage: Option<i64>,
}

/// Request body for `POST /api/admin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminCreate {
    pub username: String,
    pub password: String,
    pub is_sudo: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_webhook: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_usage: Option<i64>,
}

impl AdminCreate {
    /// A non-sudo admin with no notification hooks.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            is_sudo: false,
            telegram_id: None,
            discord_webhook: None,
            users_usage: None,
        }
    }

    pub fn sudo(mut self, is_sudo: bool) -> Self {
        self.is_sudo = is_sudo;
        self
    }
}

/// Request body for `PUT /api/admin/{username}`.
///
/// Only the fields that are `Some` are sent; the panel leaves the rest
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sudo: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_webhook: Option<String>,
}

/// Query parameters for `GET /api/admins`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminListQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub username: Option<String>,
}

impl ToQuery for AdminListQuery {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("offset", self.offset)
            .with_opt("limit", self.limit)
            .with_opt("username", self.username.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

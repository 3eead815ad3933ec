//! Request and response types for the Marzban panel REST API.
//!
//! This crate encodes the panel's HTTP contract as Rust types. It has no
//! I/O; the `sarban` crate does the requests and uses these types for
//! bodies, query strings and decoded responses.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | POST | `/api/admin/token` | form → [`TokenResponse`] |
//! | GET | `/api/admin` | → [`Admin`] |
//! | POST | `/api/admin` | [`AdminCreate`] → [`Admin`] |
//! | PUT | `/api/admin/{username}` | [`AdminModify`] → [`Admin`] |
//! | GET | `/api/admins` | [`AdminListQuery`] → `Vec<Admin>` |
//! | GET | `/api/user/{username}` | → [`User`] |
//! | POST | `/api/user` | [`UserCreate`] → [`User`] |
//! | PUT | `/api/user/{username}` | [`UserModify`] → [`User`] |
//! | GET | `/api/users` | [`UserListQuery`] → [`UsersResponse`] |
//! | GET | `/api/user/{username}/usage` | [`UsageRange`] → [`UserUsagesResponse`] |
//! | GET/DELETE | `/api/users/expired` | [`ExpiredRange`] → `Vec<String>` |
//! | GET | `/api/node/settings` | → [`NodeSettings`] |
//! | POST | `/api/node` | [`NodeCreate`] → [`Node`] |
//! | PUT | `/api/node/{id}` | [`NodeModify`] → [`Node`] |
//! | GET | `/api/nodes/usage` | [`UsageRange`] → [`NodesUsageResponse`] |
//! | GET | `/api/core` | → [`CoreStats`] |
//! | GET | `/api/system` | → [`SystemStats`] |
//! | GET | `/api/inbounds` | → [`InboundsByProtocol`] |
//! | GET/PUT | `/api/hosts` | [`HostsByTag`] |
//! | POST/PUT | `/api/user_template[/{id}]` | [`UserTemplateCreate`] → [`UserTemplate`] |
//! | GET | `/sub/{token}/[{client_type}]` | → [`SubscriptionContent`] |
//! | GET | `/sub/{token}/info` | → [`SubscriptionInfo`] |

pub mod admin;
pub mod core;
pub mod error;
pub mod node;
pub mod query;
pub mod subscription;
pub mod system;
pub mod template;
pub mod user;

pub use admin::{Admin, AdminCreate, AdminListQuery, AdminModify, TokenResponse};
pub use self::core::CoreStats;
pub use error::{ErrorBody, ValidationIssue};
pub use node::{Node, NodeCreate, NodeModify, NodeSettings, NodeStatus, NodeUsage, NodesUsageResponse};
pub use query::{PageQuery, QueryParams, ToQuery, UsageRange};
pub use subscription::{ClientType, SubscriptionContent, SubscriptionInfo};
pub use system::{HostsByTag, InboundInfo, InboundsByProtocol, ProxyHost, SystemStats};
pub use template::{UserTemplate, UserTemplateCreate, UserTemplateModify};
pub use user::{
    DataLimitResetStrategy, ExpiredRange, InboundTags, Proxies, ProxySettings, User, UserCreate,
    UserListQuery, UserModify, UserStatus, UserUsage, UserUsagesResponse, UsersResponse, GIB,
};

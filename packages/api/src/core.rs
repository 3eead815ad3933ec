//! Xray core status. The core configuration itself is an opaque JSON
//! document and is passed around as [`serde_json::Value`].

use serde::{Deserialize, Serialize};

/// Response body for `GET /api/core`.
///
/// ```json
/// { "version": "1.8.4", "started": true, "logs_websocket": "/api/core/logs" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreStats {
    pub version: String,
    pub started: bool,
    pub logs_websocket: String,
}

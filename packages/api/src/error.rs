//! Error response body returned by the panel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JSON body the panel returns alongside 4xx statuses.
///
/// `detail` is usually a string:
///
/// ```json
/// { "detail": "User not found" }
/// ```
///
/// For 422 responses it is a list of [`ValidationIssue`]s:
///
/// ```json
/// { "detail": [ { "loc": ["body", "username"], "msg": "field required", "type": "value_error.missing" } ] }
/// ```
///
/// It is kept as a raw [`Value`] because the shape differs between
/// statuses and panel versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

/// One entry of a 422 `detail` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationIssue {
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

//! Response interpreter: status code → decoded value or [`PanelError`].
//!
//! Classification depends only on the status code. The message is enriched
//! from the body's `detail` field when the body is JSON and has one; any
//! problem reading it falls back to the default message for that status and
//! never produces a different error.
//!
//! | Status | Result |
//! |--------|--------|
//! | 200 | parsed JSON, or `{}` if the body is not JSON or does not parse |
//! | 401 | [`PanelError::Unauthorized`] |
//! | 403 | [`PanelError::Forbidden`] |
//! | 404 | [`PanelError::NotFound`] |
//! | 409 | [`PanelError::Conflict`] |
//! | 400 | [`PanelError::BadRequest`] |
//! | 422 | [`PanelError::Validation`] |
//! | other | [`PanelError::Http`] with the status |

use sarban_api::{ErrorBody, SubscriptionContent, ValidationIssue};
use serde_json::{Map, Value};

use crate::error::{messages, PanelError};
use crate::transport::{RawResponse, JSON_CONTENT_TYPE};

/// Interpret an API response.
pub fn interpret(response: &RawResponse) -> Result<Value, PanelError> {
    if response.status != 200 {
        return Err(classify(response));
    }
    if !is_json(response.content_type.as_deref()) {
        return Ok(empty_object());
    }
    Ok(serde_json::from_slice(&response.body).unwrap_or_else(|_| empty_object()))
}

/// Interpret a subscription-surface response, which may be JSON or text.
///
/// Error statuses are classified exactly as in [`interpret`].
pub fn interpret_content(response: &RawResponse) -> Result<SubscriptionContent, PanelError> {
    if response.status != 200 {
        return Err(classify(response));
    }
    if is_json(response.content_type.as_deref()) {
        if let Ok(value) = serde_json::from_slice(&response.body) {
            return Ok(SubscriptionContent::Json(value));
        }
    }
    Ok(SubscriptionContent::Text(
        String::from_utf8_lossy(&response.body).into_owned(),
    ))
}

/// Map a non-200 response to its error.
pub fn classify(response: &RawResponse) -> PanelError {
    let detail = || detail_message(response);
    match response.status {
        401 => PanelError::Unauthorized(detail().unwrap_or_else(|| messages::UNAUTHORIZED.into())),
        403 => PanelError::Forbidden(detail().unwrap_or_else(|| messages::FORBIDDEN.into())),
        404 => PanelError::NotFound(detail().unwrap_or_else(|| messages::NOT_FOUND.into())),
        409 => PanelError::Conflict(detail().unwrap_or_else(|| messages::CONFLICT.into())),
        400 => PanelError::BadRequest(detail().unwrap_or_else(|| messages::BAD_REQUEST.into())),
        422 => PanelError::Validation(
            validation_message(response).unwrap_or_else(|| messages::VALIDATION_ERROR.into()),
        ),
        status => PanelError::Http {
            status,
            message: format!("HTTP {status} error occurred"),
        },
    }
}

/// Whether a `Content-Type` header declares JSON.
pub fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
        .unwrap_or(false)
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// The `detail` value of a JSON error body, if there is a non-null one.
fn error_detail(response: &RawResponse) -> Option<Value> {
    if !is_json(response.content_type.as_deref()) {
        return None;
    }
    serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()?
        .detail
}

fn render_detail(detail: Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn detail_message(response: &RawResponse) -> Option<String> {
    render_detail(error_detail(response)?)
}

/// 422 bodies carry a list of issue objects; the first one's `msg` wins.
/// A list of anything else is rendered like any other detail.
fn validation_message(response: &RawResponse) -> Option<String> {
    match error_detail(response)? {
        Value::Array(items) if items.first().is_some_and(Value::is_object) => {
            let first = items.into_iter().next()?;
            let issue: ValidationIssue = serde_json::from_value(first).ok()?;
            Some(issue.msg).filter(|m| !m.is_empty())
        }
        other => render_detail(other),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

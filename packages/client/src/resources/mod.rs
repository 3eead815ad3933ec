//! Resource method groups.
//!
//! Each submodule is a set of free async functions taking the client as
//! their first argument:
//!
//! ```no_run
//! # async fn demo(client: &sarban::PanelClient) -> Result<(), sarban::PanelError> {
//! use sarban::resources::user;
//!
//! let alice = user::get_user(client, "alice").await?;
//! println!("{} is {}", alice.username, alice.status);
//! # Ok(())
//! # }
//! ```
//!
//! # Decoding
//!
//! Functions that return a model type decode the interpreted response body.
//! A 200 whose body is not JSON is interpreted as `{}` (see
//! [`crate::interpret`]), which no model accepts, so those functions report
//! it as [`PanelError::Decode`](crate::PanelError::Decode) with code
//! [`DECODE_ERROR`](crate::error::codes::DECODE_ERROR). Functions returning
//! `bool` or [`serde_json::Value`] never decode. To see the raw value of a
//! typed endpoint, send its request through [`crate::PanelClient::request`].

use std::borrow::Cow;

pub mod admin;
pub mod core;
pub mod node;
pub mod subscription;
pub mod system;
pub mod template;
pub mod user;

/// Percent-encode a caller-supplied path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

//! Error type returned by every panel operation.
//!
//! Classification comes from the HTTP status code alone; the message is the
//! panel's `detail` string when one could be read, otherwise the default for
//! that kind. A failure to reach the panel at all is reported as
//! [`PanelError::Http`] with status [`TRANSPORT_STATUS`].

use thiserror::Error;

/// Status carried by [`PanelError::Http`] when no HTTP response was received.
pub const TRANSPORT_STATUS: u16 = 0;

/// Stable machine-readable codes, one per [`PanelError`] variant.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_LOGIN: &str = "BAD_LOGIN";
    pub const ALREADY_LOGIN: &str = "ALREADY_LOGIN";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const CONFLICT: &str = "CONFLICT";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const HTTP_ERROR: &str = "HTTP_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
}

/// Default messages used when the panel supplies no usable `detail`.
pub mod messages {
    pub const NOT_FOUND: &str = "Entity not found";
    pub const BAD_LOGIN: &str = "Username or password is incorrect";
    pub const ALREADY_LOGIN: &str = "You are currently logged in";
    pub const UNAUTHORIZED: &str = "Not authenticated";
    pub const FORBIDDEN: &str = "You are not allowed to perform this action";
    pub const CONFLICT: &str = "Entity already exists";
    pub const BAD_REQUEST: &str = "Bad request";
    pub const VALIDATION_ERROR: &str = "Validation error";
}

/// An error raised by a panel operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PanelError {
    /// 404.
    #[error("[NOT_FOUND] {0}")]
    NotFound(String),

    /// Login rejected: 401 from the token endpoint, or a 200 without a token.
    #[error("[BAD_LOGIN] {0}")]
    BadLogin(String),

    /// Login attempted on a session that already holds a token.
    #[error("[ALREADY_LOGIN] {0}")]
    AlreadyLogin(String),

    /// 401, or an authenticated call on a session without a token.
    #[error("[UNAUTHORIZED] {0}")]
    Unauthorized(String),

    /// 403.
    #[error("[FORBIDDEN] {0}")]
    Forbidden(String),

    /// 409.
    #[error("[CONFLICT] {0}")]
    Conflict(String),

    /// 400.
    #[error("[BAD_REQUEST] {0}")]
    BadRequest(String),

    /// 422.
    #[error("[VALIDATION_ERROR] {0}")]
    Validation(String),

    /// Any other status, or `status == 0` when the request never got a
    /// response (DNS, refused connection, timeout, TLS failure).
    #[error("[HTTP_ERROR] {message}")]
    Http { status: u16, message: String },

    /// A successful response whose JSON did not match the expected type,
    /// or a request body that could not be encoded.
    #[error("[DECODE_ERROR] {0}")]
    Decode(String),
}

impl PanelError {
    pub fn bad_login() -> Self {
        PanelError::BadLogin(messages::BAD_LOGIN.into())
    }

    pub fn already_login() -> Self {
        PanelError::AlreadyLogin(messages::ALREADY_LOGIN.into())
    }

    pub fn not_authenticated() -> Self {
        PanelError::Unauthorized(messages::UNAUTHORIZED.into())
    }

    /// A transport-level failure: no HTTP response was received.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        PanelError::Http {
            status: TRANSPORT_STATUS,
            message: format!("Request failed: {cause}"),
        }
    }

    /// The stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            PanelError::NotFound(_) => codes::NOT_FOUND,
            PanelError::BadLogin(_) => codes::BAD_LOGIN,
            PanelError::AlreadyLogin(_) => codes::ALREADY_LOGIN,
            PanelError::Unauthorized(_) => codes::UNAUTHORIZED,
            PanelError::Forbidden(_) => codes::FORBIDDEN,
            PanelError::Conflict(_) => codes::CONFLICT,
            PanelError::BadRequest(_) => codes::BAD_REQUEST,
            PanelError::Validation(_) => codes::VALIDATION_ERROR,
            PanelError::Http { .. } => codes::HTTP_ERROR,
            PanelError::Decode(_) => codes::DECODE_ERROR,
        }
    }

    /// The human-readable message, without the `[CODE]` prefix.
    pub fn message(&self) -> &str {
        match self {
            PanelError::NotFound(m)
            | PanelError::BadLogin(m)
            | PanelError::AlreadyLogin(m)
            | PanelError::Unauthorized(m)
            | PanelError::Forbidden(m)
            | PanelError::Conflict(m)
            | PanelError::BadRequest(m)
            | PanelError::Validation(m)
            | PanelError::Decode(m) => m,
            PanelError::Http { message, .. } => message,
        }
    }

    /// The HTTP status this error was derived from, if any.
    ///
    /// Transport failures report `Some(0)`.
    pub fn status(&self) -> Option<u16> {
        match self {
            PanelError::NotFound(_) => Some(404),
            PanelError::Unauthorized(_) => Some(401),
            PanelError::Forbidden(_) => Some(403),
            PanelError::Conflict(_) => Some(409),
            PanelError::BadRequest(_) => Some(400),
            PanelError::Validation(_) => Some(422),
            PanelError::Http { status, .. } => Some(*status),
            PanelError::BadLogin(_) | PanelError::AlreadyLogin(_) | PanelError::Decode(_) => None,
        }
    }

    /// `true` when the panel could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PanelError::Http {
                status: TRANSPORT_STATUS,
                ..
            }
        )
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(e: serde_json::Error) -> Self {
        PanelError::Decode(e.to_string())
    }
}

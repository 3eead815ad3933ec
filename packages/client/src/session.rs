//! Session state: where the panel lives and who we are logged in as.

use std::fmt;

use urlencoding::encode;

/// Prefix of every authenticated API path.
pub const API_PREFIX: &str = "api";

/// Per-client connection state.
///
/// The base address always carries a scheme. The token starts out `None`
/// and is set exactly once by a successful login; there is no logout.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    base_address: String,
    verify_tls: bool,
    token: Option<String>,
}

impl Session {
    /// Build an anonymous session.
    ///
    /// `address` is `host[:port]` with an optional scheme and trailing
    /// slash. When the scheme is missing it is `https` if `https` is set,
    /// `http` otherwise. TLS verification defaults to the same flag.
    pub fn new(address: &str, https: bool) -> Self {
        Self {
            base_address: normalize_address(address, https),
            verify_tls: https,
            token: None,
        }
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn set_token(&mut self, token: String) {
        debug_assert!(self.token.is_none(), "token is assigned once per session");
        self.token = Some(token);
    }

    /// `{base}/api/{path}`
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{API_PREFIX}/{}",
            self.base_address,
            path.trim_start_matches('/')
        )
    }

    /// `{base}/{path}`, for routes outside the API prefix.
    pub fn root_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_address, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_address", &self.base_address)
            .field("verify_tls", &self.verify_tls)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Strip trailing slashes and add a scheme if the address has none.
pub fn normalize_address(address: &str, https: bool) -> String {
    let trimmed = address.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        let scheme = if https { "https" } else { "http" };
        format!("{scheme}://{trimmed}")
    }
}

/// The shareable subscription URL for a user's subscription token.
///
/// `address` is the subscription host, which may differ from the panel
/// address. No request is made.
pub fn subscription_link(token: &str, address: &str, https: bool) -> String {
    format!("{}/sub/{}/", normalize_address(address, https), encode(token))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

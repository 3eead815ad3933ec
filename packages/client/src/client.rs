//! [`PanelClient`]: session + transport, the login flow, and the request
//! pipeline every resource function goes through.

use std::fmt;
use std::sync::Arc;

use sarban_api::{SubscriptionContent, TokenResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;
use urlencoding::encode;

use crate::config::ClientConfig;
use crate::error::PanelError;
use crate::interpret::{classify, interpret, interpret_content};
use crate::session::Session;
use crate::transport::{HttpTransport, PanelRequest, RawResponse, Surface, Transport};

/// Path of the OAuth2 password-grant token endpoint.
pub const TOKEN_PATH: &str = "admin/token";

/// A client bound to one panel.
///
/// Every operation takes `&PanelClient`, so one logged-in client can be
/// shared across tasks (e.g. behind an `Arc`). Only [`PanelClient::login`]
/// needs `&mut self`.
#[derive(Clone)]
pub struct PanelClient {
    session: Session,
    transport: Arc<dyn Transport>,
}

impl PanelClient {
    /// Build a client with an HTTP transport from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, PanelError> {
        let session = config.session();
        let transport = HttpTransport::new(session.verify_tls(), config.timeout)?;
        Ok(Self::with_transport(session, Arc::new(transport)))
    }

    /// Build a client over any [`Transport`].
    ///
    /// The transport owns TLS verification; the session's
    /// [`verify_tls`](Session::verify_tls) flag is not consulted here. Build
    /// an [`HttpTransport`] with `session.verify_tls()` to keep them in step,
    /// as [`PanelClient::new`] does.
    pub fn with_transport(session: Session, transport: Arc<dyn Transport>) -> Self {
        Self { session, transport }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // -----------------------------------------------------------------------
    // Login
    // -----------------------------------------------------------------------

    /// Exchange credentials for a bearer token.
    ///
    /// Returns `Ok(true)` once the token is stored. A session can log in
    /// only once: a second call fails with [`PanelError::AlreadyLogin`]
    /// without contacting the panel.
    ///
    /// A 401, or a 200 that carries no `access_token`, is
    /// [`PanelError::BadLogin`]. Other statuses are classified like any
    /// other call.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<bool, PanelError> {
        if self.session.is_authenticated() {
            return Err(PanelError::already_login());
        }

        let form = format!(
            "grant_type=&username={}&password={}&scope=&client_id=&client_secret=",
            encode(username),
            encode(password),
        );
        let response = self.send(PanelRequest::post(TOKEN_PATH).form(form)).await?;

        match response.status {
            200 => {
                let token = serde_json::from_slice::<TokenResponse>(&response.body)
                    .ok()
                    .and_then(|t| t.access_token)
                    .filter(|t| !t.is_empty())
                    .ok_or_else(PanelError::bad_login)?;
                self.session.set_token(token);
                info!("logged in to {} as {username}", self.session.base_address());
                Ok(true)
            }
            401 => Err(PanelError::bad_login()),
            _ => Err(classify(&response)),
        }
    }

    // -----------------------------------------------------------------------
    // Request pipeline
    // -----------------------------------------------------------------------

    /// Send any request and interpret the response.
    ///
    /// API-surface requests carry the bearer token and fail with
    /// [`PanelError::Unauthorized`] before sending if there is none.
    /// Subscription-surface requests are sent anonymously.
    pub async fn request(&self, request: PanelRequest) -> Result<Value, PanelError> {
        let request = self.authorize(request)?;
        let response = self.send(request).await?;
        interpret(&response)
    }

    /// Like [`PanelClient::request`], decoding the result into `T`.
    ///
    /// A value that does not fit `T` is [`PanelError::Decode`]. That includes
    /// the `{}` a non-JSON 200 is interpreted as, for any `T` with required
    /// fields.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: PanelRequest,
    ) -> Result<T, PanelError> {
        let value = self.request(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// For operations whose success carries no useful body.
    pub(crate) async fn execute(&self, request: PanelRequest) -> Result<bool, PanelError> {
        self.request(request).await?;
        Ok(true)
    }

    /// Subscription content, which may be JSON or text.
    pub(crate) async fn content(
        &self,
        request: PanelRequest,
    ) -> Result<SubscriptionContent, PanelError> {
        let response = self.send(request).await?;
        interpret_content(&response)
    }

    fn authorize(&self, request: PanelRequest) -> Result<PanelRequest, PanelError> {
        match request.surface {
            Surface::Subscription => Ok(request),
            Surface::Api => {
                let token = self
                    .session
                    .token()
                    .ok_or_else(PanelError::not_authenticated)?;
                Ok(request.bearer(token))
            }
        }
    }

    async fn send(&self, request: PanelRequest) -> Result<RawResponse, PanelError> {
        self.transport.send(&self.session, &request).await
    }
}

impl fmt::Debug for PanelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Transport adapter: one HTTP round trip per call.
//!
//! [`Transport`] is the seam between request construction and the network.
//! [`HttpTransport`] is the `reqwest` implementation; tests substitute
//! [`crate::mock::RecordingTransport`].
//!
//! A transport reports failures to *reach* the panel (DNS, refused
//! connection, timeout, TLS) as [`PanelError::Http`] with status `0`. HTTP
//! error statuses are returned as ordinary [`RawResponse`]s and classified by
//! [`crate::interpret`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use sarban_api::QueryParams;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::PanelError;
use crate::session::Session;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// ---------------------------------------------------------------------------
// Method
// ---------------------------------------------------------------------------

/// The HTTP methods the panel API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether a request body is sent for this method.
    pub fn carries_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A method name outside GET/POST/PUT/DELETE.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unsupported HTTP method: {0}")]
pub struct UnsupportedMethod(pub String);

impl FromStr for Method {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            _ => Err(UnsupportedMethod(s.to_string())),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

// ---------------------------------------------------------------------------
// PanelRequest
// ---------------------------------------------------------------------------

/// Which URL space a request path is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// `{base}/api/{path}`, bearer-authenticated.
    Api,
    /// `{base}/{path}`, keyed by a subscription token in the path.
    Subscription,
}

/// A request body. The two encodings are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Pre-encoded `application/x-www-form-urlencoded` payload, sent as is.
    Form(String),
    /// Structured payload, serialised as JSON.
    Json(Value),
}

/// Everything needed to issue one request. Built per call and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRequest {
    pub method: Method,
    pub surface: Surface,
    /// Relative path, without scheme, host or API prefix.
    pub path: String,
    /// Header name (lower-case) → value.
    pub headers: BTreeMap<String, String>,
    pub body: Option<Body>,
    pub params: QueryParams,
}

impl PanelRequest {
    /// An API request that accepts JSON.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("accept".to_string(), JSON_CONTENT_TYPE.to_string());
        Self {
            method,
            surface: Surface::Api,
            path: path.into(),
            headers,
            body: None,
            params: QueryParams::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// A GET on the subscription surface. No `Accept` header is set, since
    /// the panel may answer with JSON or text.
    pub fn subscription(path: impl Into<String>) -> Self {
        let mut request = Self::get(path);
        request.surface = Surface::Subscription;
        request.headers.remove("accept");
        request
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header("authorization", format!("Bearer {token}"))
    }

    /// Attach a structured body, sent as JSON.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, PanelError> {
        self.body = Some(Body::Json(serde_json::to_value(body)?));
        self.headers
            .insert("content-type".to_string(), JSON_CONTENT_TYPE.to_string());
        Ok(self)
    }

    /// Attach a pre-encoded form body, sent verbatim.
    pub fn form(mut self, encoded: impl Into<String>) -> Self {
        self.body = Some(Body::Form(encoded.into()));
        self.headers
            .insert("content-type".to_string(), FORM_CONTENT_TYPE.to_string());
        self
    }

    pub fn query(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// The absolute URL for this request, without the query string.
    pub fn url(&self, session: &Session) -> String {
        match self.surface {
            Surface::Api => session.api_url(&self.path),
            Surface::Subscription => session.root_url(&self.path),
        }
    }
}

// ---------------------------------------------------------------------------
// RawResponse
// ---------------------------------------------------------------------------

/// An HTTP response as received, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    /// A response with a JSON body and `application/json` content type.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, Some(JSON_CONTENT_TYPE), body.to_string())
    }

    /// A plain-text response.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, Some("text/plain; charset=utf-8"), body.into())
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Sends one request and returns the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, session: &Session, request: &PanelRequest)
        -> Result<RawResponse, PanelError>;
}

/// [`Transport`] over a `reqwest::Client`.
///
/// TLS verification and the request timeout are fixed when the client is
/// built and apply to every call.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(verify_tls: bool, timeout: Duration) -> Result<Self, PanelError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!verify_tls)
            .user_agent(concat!("sarban/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PanelError::transport)?;
        Ok(Self { client })
    }

    /// Wrap a pre-configured client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        session: &Session,
        request: &PanelRequest,
    ) -> Result<RawResponse, PanelError> {
        let url = request.url(session);
        debug!("{} {url}", request.method);

        let mut req = self.client.request(request.method.into(), &url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if !request.params.is_empty() {
            req = req.query(request.params.pairs());
        }
        if request.method.carries_body() {
            match &request.body {
                Some(Body::Form(encoded)) => {
                    if !request.headers.contains_key("content-type") {
                        req = req.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
                    }
                    req = req.body(encoded.clone());
                }
                Some(Body::Json(value)) => req = req.json(value),
                None => {}
            }
        }

        let response = req.send().await.map_err(|e| {
            warn!("{} {url} failed: {e}", request.method);
            PanelError::transport(e)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| {
            warn!("{} {url}: reading body failed: {e}", request.method);
            PanelError::transport(e)
        })?;

        debug!("{} {url} -> {status}", request.method);
        Ok(RawResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! In-process [`Transport`] that records requests and replays canned responses.
//!
//! Useful for unit tests of code built on this crate. Responses are consumed
//! in FIFO order; when the queue is empty, `send` fails the way an
//! unreachable panel would.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PanelError;
use crate::session::Session;
use crate::transport::{PanelRequest, RawResponse, Transport};

#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<RawResponse, PanelError>>>,
    requests: Mutex<Vec<PanelRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn push(&self, response: RawResponse) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a JSON response with the given status.
    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.push(RawResponse::json(status, &body))
    }

    /// Queue a transport failure.
    pub fn fail(&self, cause: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(PanelError::transport(cause)));
        self
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<PanelRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<PanelRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(
        &self,
        _session: &Session,
        request: &PanelRequest,
    ) -> Result<RawResponse, PanelError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PanelError::transport("no response queued")))
    }
}

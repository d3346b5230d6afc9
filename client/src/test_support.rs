//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::services::api::transport::{Transport, TransportError, TransportRequest, TransportResponse};

/// Records every request and answers from a queue of scripted outcomes.
/// Clones share the same queue and log.
#[derive(Debug, Clone, Default)]
pub struct StubTransport {
    inner: Arc<Mutex<StubState>>,
}

#[derive(Debug, Default)]
struct StubState {
    responses: VecDeque<Result<TransportResponse, TransportError>>,
    requests: Vec<TransportRequest>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: Value) {
        let bytes = serde_json::to_vec(&body).unwrap();
        self.inner
            .lock()
            .responses
            .push_back(Ok(TransportResponse::new(status, bytes)));
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.inner
            .lock()
            .responses
            .push_back(Ok(TransportResponse::new(status, body.as_bytes().to_vec())));
    }

    pub fn push_error(&self, error: TransportError) {
        self.inner.lock().responses.push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().requests.len()
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.inner.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.inner.lock().requests.last().cloned()
    }

    /// Body of the last request, parsed as JSON.
    pub fn last_json_body(&self) -> Option<Value> {
        self.last_request()
            .and_then(|request| request.body)
            .and_then(|body| serde_json::from_slice(&body).ok())
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut state = self.inner.lock();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_string())))
    }
}

/// Client pointed at the local preset, with no session.
pub fn stub_client(stub: &StubTransport) -> crate::services::api::ApiClient<StubTransport> {
    use crate::services::endpoint::EndpointStore;
    use crate::services::session::SessionStore;

    crate::services::api::ApiClient::new(
        Arc::new(EndpointStore::new(crate::services::endpoint::EndpointConfig::localhost())),
        Arc::new(SessionStore::new()),
        stub.clone(),
    )
}

/// Client pointed at the local preset, logged in as `u1` with token `tok123`.
pub fn logged_in_client(
    stub: &StubTransport,
    role: shared::Role,
) -> crate::services::api::ApiClient<StubTransport> {
    let client = stub_client(stub);
    client
        .session()
        .set_session("tok123", shared::UserSummary::new("u1", role));
    client
}

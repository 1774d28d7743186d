//! Shared fixtures for unit tests: scripted transport, recording navigator and
//! canned backend payloads.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tokio::sync::Notify;

use crate::error::ApiError;
use crate::gateway::{ApiResponse, OutboundRequest, RequestGateway, Transport};
use crate::session::{Navigator, SessionStore};
use crate::storage::{MemoryTokenStore, TokenStore};

pub const BASE_URL: &str = "http://api.test/api";

// =========================================================================
// MockTransport
// =========================================================================

/// Replays scripted responses in order and records every request it sees.
/// An optional gate holds each response until [`MockTransport::release`].
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<OutboundRequest>>,
    gate: Option<Arc<Notify>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose responses wait for [`MockTransport::release`].
    pub fn gated() -> Self {
        Self { gate: Some(Arc::new(Notify::new())), ..Self::default() }
    }

    pub fn push(&self, response: Result<ApiResponse, ApiError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(Ok(ApiResponse::new(status, body.to_string())));
    }

    pub fn push_network_error(&self) {
        self.push(Err(ApiError::Network("connection refused".to_owned())));
    }

    /// Let one gated request complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> OutboundRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

// =========================================================================
// RecordingNavigator
// =========================================================================

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<(String, bool)>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<(String, bool)> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str, replace: bool) {
        self.visits.lock().unwrap().push((path.to_owned(), replace));
    }
}

// =========================================================================
// Wiring
// =========================================================================

pub struct Harness {
    pub tokens: Arc<MemoryTokenStore>,
    pub transport: Arc<MockTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub gateway: RequestGateway,
    pub session: SessionStore,
}

pub fn harness_with(tokens: MemoryTokenStore, transport: MockTransport) -> Harness {
    let tokens = Arc::new(tokens);
    let transport = Arc::new(transport);
    let navigator = Arc::new(RecordingNavigator::default());
    let gateway = RequestGateway::new(
        BASE_URL,
        tokens.clone() as Arc<dyn TokenStore>,
        transport.clone() as Arc<dyn Transport>,
    );
    let session = SessionStore::new(gateway.clone(), tokens.clone(), navigator.clone());
    Harness { tokens, transport, navigator, gateway, session }
}

pub fn harness() -> Harness {
    harness_with(MemoryTokenStore::new(), MockTransport::new())
}

// =========================================================================
// Payloads
// =========================================================================

pub fn musician_json() -> Value {
    json!({
        "_id": "m1",
        "name": "Ana Torres",
        "email": "ana@example.com",
        "role": "musician",
        "profile": { "bio": "Guitarrista", "genres": ["jazz"], "instruments": ["guitarra"] },
        "multimedia": { "fotos": [], "audio": [] }
    })
}

pub fn organizer_json() -> Value {
    json!({
        "_id": "o1",
        "name": "Sala Sur",
        "email": "sala@example.com",
        "role": "organizer",
        "profile": { "venueName": "Sala Sur", "capacity": 150 }
    })
}

pub fn offer_json(id: &str) -> Value {
    json!({
        "_id": id,
        "titulo": "Boda en Sevilla",
        "descripcion": "Cuarteto de cuerda para ceremonia",
        "fechaEvento": "2030-06-01T18:00:00.000Z",
        "genero": "clasica",
        "ubicacion": "Sevilla",
        "organizer": { "_id": "o1", "name": "Sala Sur" },
        "postulaciones": []
    })
}

// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use bark_lnclient::{BarkService, Config};
use serde_json::{Value, json};

/// A request the mock ledger received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct MockState {
    responses: Mutex<HashMap<String, (StatusCode, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
    hits: AtomicUsize,
}

/// In-process stand-in for the bark REST API.
/// Serves canned bodies per path and records every request.
pub struct MockLedger {
    state: Arc<MockState>,
    addr: SocketAddr,
}

impl MockLedger {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { state, addr }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn service(&self) -> BarkService {
        BarkService::new(&Config::new(&self.url()).unwrap())
    }

    pub fn respond(&self, path: &str, status: StatusCode, body: impl Into<String>) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.into()));
    }

    pub fn respond_json(&self, path: &str, body: Value) {
        self.respond(path, StatusCode::OK, body.to_string());
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request recorded")
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(String::from),
        content_type,
        body,
    });

    state
        .responses
        .lock()
        .unwrap()
        .get(uri.path())
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, format!("no route {}", uri.path())))
}

/// Address nothing is listening on.
pub fn dead_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Fixture: movement records as bark returns them
pub struct Movements;

impl Movements {
    pub fn receive(id: i64, destination: &str, amount_sat: i64, fee_sat: i64) -> Value {
        json!({
            "id": id,
            "status": "pending",
            "subsystem": {"name": "bark.lightning_receive", "kind": "receive"},
            "metadata": "{}",
            "intended_balance_sat": amount_sat,
            "effective_balance_sat": amount_sat,
            "offchain_fee_sat": fee_sat,
            "sent_to": [],
            "received_on": [{"destination": destination, "amount_sat": amount_sat}],
            "input_vtxos": [],
            "output_vtxos": ["vtxo-out-1"],
            "exited_vtxos": [],
            "time": {
                "created_at": "2025-01-10T10:00:00Z",
                "updated_at": "2025-01-10T10:00:05Z",
                "completed_at": null
            }
        })
    }

    pub fn send(id: i64, destination: &str, amount_sat: i64, fee_sat: i64) -> Value {
        json!({
            "id": id,
            "status": "finished",
            "subsystem": {"name": "bark.lightning_send", "kind": "send"},
            "metadata": "{}",
            "intended_balance_sat": -amount_sat,
            "effective_balance_sat": -amount_sat - fee_sat,
            "offchain_fee_sat": fee_sat,
            "sent_to": [{"destination": destination, "amount_sat": amount_sat}],
            "received_on": [],
            "input_vtxos": ["vtxo-in-1"],
            "output_vtxos": [],
            "exited_vtxos": [],
            "time": {
                "created_at": "2025-01-11T08:30:00Z",
                "updated_at": "2025-01-11T08:30:10Z",
                "completed_at": "2025-01-11T08:31:00Z"
            }
        })
    }

    pub fn with_kind(mut movement: Value, kind: &str) -> Value {
        movement["subsystem"]["kind"] = json!(kind);
        movement
    }

    pub fn with_time(mut movement: Value, field: &str, value: &str) -> Value {
        movement["time"][field] = json!(value);
        movement
    }

    pub fn with_status(mut movement: Value, status: &str) -> Value {
        movement["status"] = json!(status);
        movement
    }
}

/// Fixture: balance records as bark returns them
pub fn wallet_balance_json(spendable_sat: i64) -> Value {
    json!({
        "spendable_sat": spendable_sat,
        "pending_lightning_send_sat": 10,
        "pending_lightning_receive_sat": 20,
        "pending_in_round_sat": 0,
        "pending_board_sat": 0,
        "pending_exit_sat": null
    })
}

pub fn onchain_balance_json(total_sat: i64, trusted_spendable_sat: i64, immature_sat: i64) -> Value {
    json!({
        "total_sat": total_sat,
        "trusted_spendable_sat": trusted_spendable_sat,
        "immature_sat": immature_sat,
        "trusted_pending_sat": 0,
        "untrusted_pending_sat": 0,
        "confirmed_sat": total_sat
    })
}

//! Shared test helpers for `walletrpc-core` unit tests.
//!
//! Consolidates JSON-RPC envelope builders and mock-backed client
//! construction so wrapper tests across modules share one source of truth.

use std::sync::Arc;

use crate::rpc::mock::MockTransport;
use crate::rpc::{ClientConfig, WalletRpcClient};

pub const TEST_URL: &str = "http://127.0.0.1:18082/json_rpc";

// ==============================================================================
// Envelopes
// ==============================================================================

pub fn ok_envelope(result: serde_json::Value) -> String {
    serde_json::json!({"id": "0", "jsonrpc": "2.0", "result": result}).to_string()
}

pub fn error_envelope(code: i64, message: &str) -> String {
    serde_json::json!({
        "id": "0",
        "jsonrpc": "2.0",
        "error": {"code": code, "message": message},
    })
    .to_string()
}

// ==============================================================================
// Clients
// ==============================================================================

/// Client pointed at [`TEST_URL`] that talks only to `mock`.
pub fn client_with(mock: &Arc<MockTransport>) -> WalletRpcClient {
    WalletRpcClient::new(ClientConfig::new(TEST_URL).with_transport(mock.clone()))
}

/// Client plus mock that answers every call with `result`.
pub fn client_returning(result: serde_json::Value) -> (WalletRpcClient, Arc<MockTransport>) {
    let mock = MockTransport::builder().respond_ok(result).build();
    (client_with(&mock), mock)
}

/// Client plus mock that answers every call with a JSON-RPC error envelope.
pub fn client_failing(code: i64, message: &str) -> (WalletRpcClient, Arc<MockTransport>) {
    let mock = MockTransport::builder()
        .respond(200, error_envelope(code, message))
        .build();
    (client_with(&mock), mock)
}

/// Assert the last request used `method` and return its `params` member.
pub fn sent_params(mock: &MockTransport, method: &str) -> serde_json::Value {
    let req = mock.last_request();
    assert_eq!(req.json["method"], method, "unexpected JSON-RPC method");
    req.json.get("params").cloned().unwrap_or(serde_json::Value::Null)
}

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};

use crate::error::{CoreError, RpcError};

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a, P> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) params: Option<&'a P>,
}

#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

/// Result shape for calls whose answer carries no data.
///
/// The envelope is still decoded, so a JSON-RPC error or a response without
/// `result` is reported, but any `result` value (including `null`) is
/// accepted and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Empty)
    }
}

/// Parse a JSON-RPC error value into a structured `CoreError`.
///
/// JSON-RPC 2.0 defines errors as `{"code": <int>, "message": <string>}`.
/// If the error value matches that shape, we produce a `ServerError`;
/// otherwise we fall back to `InvalidResponse` with the raw JSON.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> CoreError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    if let Ok(parsed) = serde_json::from_value::<JsonRpcError>(err.clone()) {
        CoreError::Rpc(RpcError::ServerError {
            code: parsed.code,
            message: parsed.message,
        })
    } else {
        CoreError::Rpc(RpcError::InvalidResponse(format!(
            "non-standard JSON-RPC error: {err}"
        )))
    }
}

/// Decode a 200 response body into the caller's result shape.
pub(super) fn decode_response<R: DeserializeOwned>(body: &[u8]) -> Result<R, CoreError> {
    let decoded: JsonRpcResponse = serde_json::from_slice(body).map_err(|e| {
        RpcError::InvalidResponse(format!(
            "decode JSON-RPC response: {e}; body={}",
            String::from_utf8_lossy(body)
        ))
    })?;

    if let Some(err) = decoded.error {
        return Err(parse_jsonrpc_error(err));
    }

    let result = decoded.result.ok_or_else(|| {
        RpcError::InvalidResponse("response has neither result nor error".to_owned())
    })?;
    serde_json::from_value(result)
        .map_err(|e| RpcError::InvalidResponse(format!("unexpected result shape: {e}")).into())
}

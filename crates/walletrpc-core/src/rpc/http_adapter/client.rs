use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};

use super::super::{ClientConfig, HttpRequest, HttpTransport};
use super::protocol::{decode_response, Empty, JsonRpcRequest};
use super::transport::ReqwestTransport;

/// JSON-RPC client for a Monero wallet (or daemon) endpoint.
///
/// Every typed wrapper funnels through [`WalletRpcClient::call`]: one POST,
/// one decode, no retries. The client holds no per-call state besides the
/// request-id counter, so a shared reference can serve concurrent calls.
pub struct WalletRpcClient {
    transport: Arc<dyn HttpTransport>,
    url: String,
    headers: Vec<(String, String)>,
    next_id: AtomicU64,
}

impl WalletRpcClient {
    /// Create a client from `config`.
    ///
    /// Nothing is validated or contacted here; a malformed address or header
    /// is reported by the first call.
    pub fn new(config: ClientConfig) -> Self {
        let transport = config
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()));

        // Custom headers go after the default so they can override it.
        let mut headers = Vec::with_capacity(config.custom_headers.len() + 1);
        headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        headers.extend(config.custom_headers);

        Self {
            transport,
            url: config.address,
            headers,
            next_id: AtomicU64::new(initial_request_id()),
        }
    }

    /// Shorthand for a client with no custom headers and the default transport.
    pub fn from_address(address: impl Into<String>) -> Self {
        Self::new(ClientConfig::new(address))
    }

    pub fn address(&self) -> &str {
        &self.url
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Issue `method` with optional `params` and decode the result as `R`.
    pub async fn call<P, R>(&self, method: &str, params: Option<&P>) -> Result<R, CoreError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let id = self.next_request_id();
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.has_params = params.is_some(),
            "rpc call"
        );
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        let payload = serde_json::to_vec(&req)
            .map_err(|e| CoreError::InvalidParams(format!("encode {method} request: {e}")))?;

        let response = self
            .transport
            .post(HttpRequest {
                url: &self.url,
                headers: &self.headers,
                body: &payload,
            })
            .await?;

        debug!(
            rpc.id = id,
            rpc.method = method,
            status = response.status,
            body_len = response.body.len(),
            "rpc response"
        );
        if response.status != 200 {
            return Err(RpcError::HttpStatus {
                status: response.status,
            }
            .into());
        }
        trace!(
            rpc.id = id,
            rpc.method = method,
            body = %String::from_utf8_lossy(&response.body),
            "rpc response body"
        );

        decode_response(&response.body)
    }

    /// Issue `method` and check only that the daemon did not report an error.
    pub async fn call_discard<P>(&self, method: &str, params: Option<&P>) -> Result<(), CoreError>
    where
        P: Serialize,
    {
        self.call::<P, Empty>(method, params).await.map(|_| ())
    }

    /// Parameterless form of [`Self::call`].
    pub async fn call_no_params<R: DeserializeOwned>(&self, method: &str) -> Result<R, CoreError> {
        self.call::<(), R>(method, None).await
    }

    /// Parameterless form of [`Self::call_discard`].
    pub async fn call_discard_no_params(&self, method: &str) -> Result<(), CoreError> {
        self.call_discard::<()>(method, None).await
    }
}

impl fmt::Debug for WalletRpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletRpcClient")
            .field("url", &self.url)
            .field("headers", &self.headers.len())
            .field("transport", &"<dyn HttpTransport>")
            .finish()
    }
}

fn initial_request_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

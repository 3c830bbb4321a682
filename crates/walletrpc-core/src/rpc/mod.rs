//! Wallet JSON-RPC transport layer.
//!
//! Defines the [`HttpTransport`] trait that carries one encoded request to
//! the daemon, the default `reqwest` implementation ([`ReqwestTransport`]),
//! the [`WalletRpcClient`] that owns dispatch, and a test mock
//! (`mock::MockTransport`).

mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::{Empty, ReqwestTransport, WalletRpcClient};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RpcError;

/// One outgoing HTTP POST, already encoded.
#[derive(Debug, Clone, Copy)]
pub struct HttpRequest<'a> {
    pub url: &'a str,
    /// Applied in order with insert semantics: a later entry replaces an
    /// earlier one with the same name.
    pub headers: &'a [(String, String)],
    pub body: &'a [u8],
}

/// Status and fully read body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Pluggable HTTP carrier for JSON-RPC requests.
///
/// Implementations own connection management, TLS, proxies, and timeouts.
/// They must not retry: a failure to obtain any response is reported as
/// [`RpcError::Transport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(&self, request: HttpRequest<'_>) -> Result<HttpResponse, RpcError>;
}

/// Construction-time settings for [`WalletRpcClient`].
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// JSON-RPC endpoint, e.g. `http://127.0.0.1:18082/json_rpc`.
    pub address: String,
    /// Sent verbatim with every request, including empty values.
    pub custom_headers: HashMap<String, String>,
    /// Falls back to [`ReqwestTransport::new`] when unset.
    pub transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self.custom_headers.keys().map(String::as_str).collect();
        f.debug_struct("ClientConfig")
            .field("address", &self.address)
            .field("custom_headers", &header_names)
            .field(
                "transport",
                &self.transport.as_ref().map(|_| "<dyn HttpTransport>"),
            )
            .finish()
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::RpcError;

use super::super::{HttpRequest, HttpResponse, HttpTransport};

/// Default [`HttpTransport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the default client.
    ///
    /// Only the connect phase is bounded; wallet calls such as
    /// `rescan_blockchain` legitimately run for minutes, so callers who want
    /// a whole-request deadline pass their own client to [`Self::with_client`].
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client builder uses valid static config");
        Self { client }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: HttpRequest<'_>) -> Result<HttpResponse, RpcError> {
        let headers = build_header_map(request.headers)?;

        let response = self
            .client
            .post(request.url)
            .headers(headers)
            .body(request.body.to_vec())
            .send()
            .await
            .map_err(RpcError::transport)?;
        let status = response.status().as_u16();

        // A non-200 answer is not a JSON-RPC envelope; drop it unread.
        if status != 200 {
            return Ok(HttpResponse {
                status,
                body: Vec::new(),
            });
        }

        let body = response.bytes().await.map_err(RpcError::transport)?;
        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn build_header_map(headers: &[(String, String)]) -> Result<HeaderMap, RpcError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(RpcError::transport)?;
        let value = HeaderValue::from_str(value).map_err(RpcError::transport)?;
        map.insert(name, value);
    }
    Ok(map)
}

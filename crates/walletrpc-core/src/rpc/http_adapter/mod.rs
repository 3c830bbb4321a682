//! Native JSON-RPC client for Monero wallet and daemon endpoints.
//!
//! Implements dispatch over any [`super::HttpTransport`], with a `reqwest`
//! transport as the default.

mod client;
mod protocol;
mod transport;

pub use client::WalletRpcClient;
pub use protocol::Empty;
pub use transport::ReqwestTransport;

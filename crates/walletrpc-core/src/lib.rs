pub mod amount;
pub mod daemon;
pub mod error;
pub mod rpc;
pub mod types;
mod wallet;

#[cfg(test)]
mod test_util;

pub use error::{CoreError, RpcError};
pub use rpc::{ClientConfig, HttpTransport, WalletRpcClient};

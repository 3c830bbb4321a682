//! Typed wrappers for the wallet JSON-RPC methods.
//!
//! Each submodule adds an `impl WalletRpcClient` block for one area of the
//! wallet API. Every wrapper builds a params struct, calls
//! [`WalletRpcClient::call`](crate::rpc::WalletRpcClient::call) with a fixed
//! method name, and unwraps the decoded result. No wrapper touches HTTP.

mod account;
mod address;
mod address_book;
mod history;
mod keys;
mod lifecycle;
mod mining;
mod notes;
mod transfer;

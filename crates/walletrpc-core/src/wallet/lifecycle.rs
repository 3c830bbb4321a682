use serde::Serialize;

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;

impl WalletRpcClient {
    /// Save the wallet file.
    pub async fn store(&self) -> Result<(), CoreError> {
        self.call_discard_no_params("store").await
    }

    /// Save the wallet and shut the RPC server down.
    pub async fn stop_wallet(&self) -> Result<(), CoreError> {
        self.call_discard_no_params("stop_wallet").await
    }

    /// Create a wallet file in the server's wallet directory and open it.
    pub async fn create_wallet(
        &self,
        filename: &str,
        password: &str,
        language: &str,
    ) -> Result<(), CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            filename: &'a str,
            password: &'a str,
            language: &'a str,
        }
        self.call_discard(
            "create_wallet",
            Some(&In {
                filename,
                password,
                language,
            }),
        )
        .await
    }

    pub async fn open_wallet(&self, filename: &str, password: &str) -> Result<(), CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            filename: &'a str,
            password: &'a str,
        }
        self.call_discard("open_wallet", Some(&In { filename, password }))
            .await
    }

    /// Discard cached chain data and rescan from the wallet's start height.
    pub async fn rescan_blockchain(&self) -> Result<(), CoreError> {
        self.call_discard_no_params("rescan_blockchain").await
    }

    /// Re-check which owned outputs have been spent.
    pub async fn rescan_spent(&self) -> Result<(), CoreError> {
        self.call_discard_no_params("rescan_spent").await
    }
}

use serde::Deserialize;

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;
use crate::types::{
    SweepAllRequest, SweepAllResponse, TransferRequest, TransferResponse, TransferSplitResponse,
};

impl WalletRpcClient {
    /// Send to one or more destinations in a single transaction.
    pub async fn transfer(&self, req: &TransferRequest) -> Result<TransferResponse, CoreError> {
        self.call("transfer", Some(req)).await
    }

    /// Like [`Self::transfer`], but the wallet may split the payment across
    /// several transactions.
    pub async fn transfer_split(
        &self,
        req: &TransferRequest,
    ) -> Result<TransferSplitResponse, CoreError> {
        self.call("transfer_split", Some(req)).await
    }

    /// Sweep unmixable dust outputs. Returns the created transaction hashes.
    pub async fn sweep_dust(&self) -> Result<Vec<String>, CoreError> {
        #[derive(Deserialize)]
        struct Out {
            #[serde(default)]
            tx_hash_list: Vec<String>,
        }
        let out: Out = self.call_no_params("sweep_dust").await?;
        Ok(out.tx_hash_list)
    }

    /// Send all unlocked balance to one address.
    pub async fn sweep_all(&self, req: &SweepAllRequest) -> Result<SweepAllResponse, CoreError> {
        self.call("sweep_all", Some(req)).await
    }
}

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;
use crate::types::{
    GetTransfersRequest, GetTransfersResponse, IncomingTransfer, Payment, Transfer, TransferType,
};

#[derive(Deserialize)]
struct PaymentsOut {
    #[serde(default)]
    payments: Vec<Payment>,
}

impl WalletRpcClient {
    /// Incoming payments carrying `payment_id`.
    pub async fn get_payments(&self, payment_id: &str) -> Result<Vec<Payment>, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            payment_id: &'a str,
        }
        let out: PaymentsOut = self
            .call("get_payments", Some(&In { payment_id }))
            .await?;
        Ok(out.payments)
    }

    /// Incoming payments for any of `payment_ids`, at or above
    /// `min_block_height`.
    pub async fn get_bulk_payments(
        &self,
        payment_ids: &[String],
        min_block_height: u64,
    ) -> Result<Vec<Payment>, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            payment_ids: &'a [String],
            min_block_height: u64,
        }
        let out: PaymentsOut = self
            .call(
                "get_bulk_payments",
                Some(&In {
                    payment_ids,
                    min_block_height,
                }),
            )
            .await?;
        Ok(out.payments)
    }

    pub async fn get_transfers(
        &self,
        req: &GetTransfersRequest,
    ) -> Result<GetTransfersResponse, CoreError> {
        self.call("get_transfers", Some(req)).await
    }

    /// Look up one transfer by transaction id.
    ///
    /// The wallet may answer without a `transfer` member; that is reported
    /// as `Ok(None)` rather than a decode failure.
    pub async fn get_transfer_by_txid(&self, txid: &str) -> Result<Option<Transfer>, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            txid: &'a str,
        }
        #[derive(Deserialize)]
        struct Out {
            #[serde(default)]
            transfer: Option<Transfer>,
        }
        let out: Out = self
            .call("get_transfer_by_txid", Some(&In { txid }))
            .await?;
        Ok(out.transfer)
    }

    /// Owned outputs, filtered by availability.
    pub async fn incoming_transfers(
        &self,
        transfer_type: TransferType,
    ) -> Result<Vec<IncomingTransfer>, CoreError> {
        #[derive(Serialize)]
        struct In {
            transfer_type: TransferType,
        }
        #[derive(Deserialize)]
        struct Out {
            #[serde(default)]
            transfers: Vec<IncomingTransfer>,
        }
        let out: Out = self
            .call("incoming_transfers", Some(&In { transfer_type }))
            .await?;
        Ok(out.transfers)
    }
}

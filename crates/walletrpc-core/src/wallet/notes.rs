use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;

impl WalletRpcClient {
    /// Attach `notes[i]` to `txids[i]`. The lists are sent as given; the
    /// wallet rejects mismatched lengths.
    pub async fn set_tx_notes(&self, txids: &[String], notes: &[String]) -> Result<(), CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            txids: &'a [String],
            notes: &'a [String],
        }
        self.call_discard("set_tx_notes", Some(&In { txids, notes }))
            .await
    }

    /// Notes for `txids`, in the same order. Unannotated transactions yield
    /// empty strings.
    pub async fn get_tx_notes(&self, txids: &[String]) -> Result<Vec<String>, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            txids: &'a [String],
        }
        #[derive(Deserialize)]
        struct Out {
            #[serde(default)]
            notes: Vec<String>,
        }
        let out: Out = self.call("get_tx_notes", Some(&In { txids })).await?;
        Ok(out.notes)
    }
}

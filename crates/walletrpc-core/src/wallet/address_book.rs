use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;
use crate::types::AddressBookEntry;

impl WalletRpcClient {
    /// Fetch address book rows by index.
    pub async fn get_address_book(
        &self,
        indexes: &[u64],
    ) -> Result<Vec<AddressBookEntry>, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            entries: &'a [u64],
        }
        #[derive(Deserialize)]
        struct Out {
            #[serde(default)]
            entries: Vec<AddressBookEntry>,
        }
        let out: Out = self
            .call("get_address_book", Some(&In { entries: indexes }))
            .await?;
        Ok(out.entries)
    }

    /// Add `entry` and return the index the wallet assigned to it.
    pub async fn add_address_book(&self, entry: &AddressBookEntry) -> Result<u64, CoreError> {
        #[derive(Deserialize)]
        struct Out {
            index: u64,
        }
        let out: Out = self.call("add_address_book", Some(entry)).await?;
        Ok(out.index)
    }

    pub async fn delete_address_book(&self, index: u64) -> Result<(), CoreError> {
        #[derive(Serialize)]
        struct In {
            index: u64,
        }
        self.call_discard("delete_address_book", Some(&In { index }))
            .await
    }
}

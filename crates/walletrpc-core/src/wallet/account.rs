use serde::Deserialize;

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;
use crate::types::Balance;

impl WalletRpcClient {
    /// Total and unlocked balance in atomic units.
    pub async fn get_balance(&self) -> Result<Balance, CoreError> {
        self.call_no_params("getbalance").await
    }

    /// Primary address of the open wallet.
    pub async fn get_address(&self) -> Result<String, CoreError> {
        #[derive(Deserialize)]
        struct Out {
            address: String,
        }
        let out: Out = self.call_no_params("getaddress").await?;
        Ok(out.address)
    }

    /// Height the wallet has scanned to.
    pub async fn get_height(&self) -> Result<u64, CoreError> {
        #[derive(Deserialize)]
        struct Out {
            height: u64,
        }
        let out: Out = self.call_no_params("getheight").await?;
        Ok(out.height)
    }

    /// Mnemonic languages the wallet can create seeds in.
    pub async fn get_languages(&self) -> Result<Vec<String>, CoreError> {
        #[derive(Deserialize)]
        struct Out {
            #[serde(default)]
            languages: Vec<String>,
        }
        let out: Out = self.call_no_params("get_languages").await?;
        Ok(out.languages)
    }
}

//! Block-explorer calls served by the node daemon rather than the wallet.
//!
//! These go through the same dispatch as the wallet methods; point a
//! separate [`WalletRpcClient`] at the daemon's `/json_rpc` endpoint to use
//! them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;

// ==============================================================================
// Types
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    #[serde(default)]
    pub block_size: u64,
    pub depth: u64,
    pub difficulty: u64,
    pub hash: String,
    pub height: u64,
    pub major_version: u32,
    pub minor_version: u32,
    pub nonce: u64,
    #[serde(default)]
    pub num_txes: u64,
    pub orphan_status: bool,
    pub prev_hash: String,
    pub reward: u64,
    pub timestamp: u64,
}

/// Result of `getlastblockheader` and the `getblockheaderby*` calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeaderResponse {
    pub block_header: BlockHeader,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

/// Result of `getblock`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockResponse {
    /// Hex-encoded block blob.
    pub blob: String,
    pub block_header: BlockHeader,
    /// JSON rendering of the block, as a string.
    pub json: String,
    #[serde(default)]
    pub miner_tx_hash: String,
    #[serde(default)]
    pub tx_hashes: Vec<String>,
    pub status: String,
    #[serde(default)]
    pub untrusted: bool,
}

/// Selects a block by height or by hash. Serializes to `{"height": n}` or
/// `{"hash": "..."}`, the params shape `getblock` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockId {
    Height(u64),
    Hash(String),
}

impl From<u64> for BlockId {
    fn from(height: u64) -> Self {
        Self::Height(height)
    }
}

// ==============================================================================
// Calls
// ==============================================================================

impl WalletRpcClient {
    /// Header of the current chain tip.
    pub async fn get_last_block_header(&self) -> Result<BlockHeaderResponse, CoreError> {
        self.call_no_params("getlastblockheader").await
    }

    pub async fn get_block(&self, id: &BlockId) -> Result<BlockResponse, CoreError> {
        self.call("getblock", Some(id)).await
    }

    pub async fn get_block_header_by_height(
        &self,
        height: u64,
    ) -> Result<BlockHeaderResponse, CoreError> {
        #[derive(Serialize)]
        struct In {
            height: u64,
        }
        self.call("getblockheaderbyheight", Some(&In { height }))
            .await
    }

    pub async fn get_block_header_by_hash(
        &self,
        hash: &str,
    ) -> Result<BlockHeaderResponse, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            hash: &'a str,
        }
        self.call("getblockheaderbyhash", Some(&In { hash })).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_util::*;

    fn header_json(height: u64) -> serde_json::Value {
        json!({
            "block_size": 5500,
            "depth": 0,
            "difficulty": 61_125_637_847u64,
            "hash": "20ef50e4fc4ed8b5b0fbfd0d4dc1edda33e4b25ff4aa35b5f5a50f39e7f7b6b0",
            "height": height,
            "major_version": 16,
            "minor_version": 16,
            "nonce": 1_885_649_739,
            "num_txes": 37,
            "orphan_status": false,
            "prev_hash": "22c72248ae9c5a2863c94735d710a3525c499f70707d1c2f395169bc5c8a0da3",
            "reward": 1_181_337_498_013u64,
            "timestamp": 1_527_168_629,
        })
    }

    #[tokio::test]
    async fn last_block_header_decodes() {
        let (client, mock) = client_returning(json!({
            "block_header": header_json(1_562_023),
            "status": "OK",
            "untrusted": false,
        }));
        let resp = client.get_last_block_header().await.unwrap();
        assert_eq!(resp.status, "OK");
        assert_eq!(resp.block_header.height, 1_562_023);
        assert_eq!(resp.block_header.reward, 1_181_337_498_013);
        assert_eq!(
            sent_params(&mock, "getlastblockheader"),
            serde_json::Value::Null
        );
    }

    #[tokio::test]
    async fn get_block_by_height_and_hash() {
        let (client, mock) = client_returning(json!({
            "blob": "1010c58bab9b06",
            "block_header": header_json(912_345),
            "json": "{\n  \"major_version\": 16\n}",
            "miner_tx_hash": "c7da3965f25c19b8eb7dd8db48dcd4e7c885e2491db77e289f0609bf8e08ec30",
            "tx_hashes": ["eab76986a0cbcae690d8499f0f616f783fd2c89c6f611417f18011950dbdab2e"],
            "status": "OK",
            "untrusted": false,
        }));

        let block = client.get_block(&BlockId::Height(912_345)).await.unwrap();
        assert_eq!(block.block_header.height, 912_345);
        assert_eq!(block.tx_hashes.len(), 1);
        assert_eq!(sent_params(&mock, "getblock"), json!({"height": 912_345}));

        client
            .get_block(&BlockId::Hash("20ef50e4".into()))
            .await
            .unwrap();
        assert_eq!(sent_params(&mock, "getblock"), json!({"hash": "20ef50e4"}));
    }

    #[tokio::test]
    async fn header_lookups_send_selector() {
        let (client, mock) = client_returning(json!({
            "block_header": header_json(10),
            "status": "OK",
        }));
        client.get_block_header_by_height(10).await.unwrap();
        assert_eq!(
            sent_params(&mock, "getblockheaderbyheight"),
            json!({"height": 10})
        );
        client.get_block_header_by_hash("abcd").await.unwrap();
        assert_eq!(
            sent_params(&mock, "getblockheaderbyhash"),
            json!({"hash": "abcd"})
        );
    }

    #[tokio::test]
    async fn get_block_unknown_height_is_server_error() {
        let (client, _mock) = client_failing(
            -2,
            "Requested block height: 99999999 greater than current top block height: 3100000",
        );
        let err = client
            .get_block(&BlockId::from(99_999_999))
            .await
            .expect_err("must fail");
        assert_eq!(err.server_code(), Some(-2));
    }
}

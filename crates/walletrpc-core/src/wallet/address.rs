use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;
use crate::types::{IntegratedAddress, UriDefinition};

impl WalletRpcClient {
    /// Combine the wallet address with `payment_id`. An empty id asks the
    /// wallet to generate a random one.
    pub async fn make_integrated_address(&self, payment_id: &str) -> Result<String, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            payment_id: &'a str,
        }
        #[derive(Deserialize)]
        struct Out {
            integrated_address: String,
        }
        let out: Out = self
            .call("make_integrated_address", Some(&In { payment_id }))
            .await?;
        Ok(out.integrated_address)
    }

    pub async fn split_integrated_address(
        &self,
        integrated_address: &str,
    ) -> Result<IntegratedAddress, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            integrated_address: &'a str,
        }
        self.call("split_integrated_address", Some(&In { integrated_address }))
            .await
    }

    /// Encode `uri` as a `monero:` payment URI string.
    pub async fn make_uri(&self, uri: &UriDefinition) -> Result<String, CoreError> {
        #[derive(Deserialize)]
        struct Out {
            uri: String,
        }
        let out: Out = self.call("make_uri", Some(uri)).await?;
        Ok(out.uri)
    }

    /// Decode a `monero:` payment URI. The inverse of [`Self::make_uri`].
    pub async fn parse_uri(&self, uri: &str) -> Result<UriDefinition, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            uri: &'a str,
        }
        // The wallet nests the parsed fields under a `uri` object.
        #[derive(Deserialize)]
        struct Out {
            uri: UriDefinition,
        }
        let out: Out = self.call("parse_uri", Some(&In { uri })).await?;
        Ok(out.uri)
    }
}

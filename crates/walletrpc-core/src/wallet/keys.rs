use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;
use crate::types::{ImportKeyImagesResponse, QueryKeyType, SignedKeyImage};

#[derive(Serialize)]
struct KeyImagesIn<'a> {
    signed_key_images: &'a [SignedKeyImage],
}

impl WalletRpcClient {
    /// Return the mnemonic seed or one of the private keys.
    pub async fn query_key(&self, key_type: QueryKeyType) -> Result<String, CoreError> {
        #[derive(Serialize)]
        struct In {
            key_type: QueryKeyType,
        }
        #[derive(Deserialize)]
        struct Out {
            key: String,
        }
        let out: Out = self.call("query_key", Some(&In { key_type })).await?;
        Ok(out.key)
    }

    /// Sign `data` with the wallet's spend key.
    pub async fn sign(&self, data: &str) -> Result<String, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            data: &'a str,
        }
        #[derive(Deserialize)]
        struct Out {
            signature: String,
        }
        let out: Out = self.call("sign", Some(&In { data })).await?;
        Ok(out.signature)
    }

    /// Check a signature produced by [`Self::sign`] against `address`.
    pub async fn verify(
        &self,
        data: &str,
        address: &str,
        signature: &str,
    ) -> Result<bool, CoreError> {
        #[derive(Serialize)]
        struct In<'a> {
            data: &'a str,
            address: &'a str,
            signature: &'a str,
        }
        #[derive(Deserialize)]
        struct Out {
            good: bool,
        }
        let out: Out = self
            .call(
                "verify",
                Some(&In {
                    data,
                    address,
                    signature,
                }),
            )
            .await?;
        Ok(out.good)
    }

    pub async fn export_key_images(&self) -> Result<Vec<SignedKeyImage>, CoreError> {
        #[derive(Deserialize)]
        struct Out {
            #[serde(default)]
            signed_key_images: Vec<SignedKeyImage>,
        }
        let out: Out = self.call_no_params("export_key_images").await?;
        Ok(out.signed_key_images)
    }

    pub async fn import_key_images(
        &self,
        signed_key_images: &[SignedKeyImage],
    ) -> Result<ImportKeyImagesResponse, CoreError> {
        self.call("import_key_images", Some(&KeyImagesIn { signed_key_images }))
            .await
    }
}

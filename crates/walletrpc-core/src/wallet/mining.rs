use serde::Serialize;

use crate::error::CoreError;
use crate::rpc::WalletRpcClient;

impl WalletRpcClient {
    /// Ask the connected daemon to mine to this wallet.
    ///
    /// `threads_count` is forwarded as given; the daemon decides what is
    /// acceptable.
    pub async fn start_mining(
        &self,
        threads_count: u32,
        do_background_mining: bool,
        ignore_battery: bool,
    ) -> Result<(), CoreError> {
        #[derive(Serialize)]
        struct In {
            threads_count: u32,
            do_background_mining: bool,
            ignore_battery: bool,
        }
        self.call_discard(
            "start_mining",
            Some(&In {
                threads_count,
                do_background_mining,
                ignore_battery,
            }),
        )
        .await
    }

    pub async fn stop_mining(&self) -> Result<(), CoreError> {
        self.call_discard_no_params("stop_mining").await
    }
}

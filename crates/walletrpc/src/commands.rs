use serde_json::{json, Value};

use walletrpc_core::amount::{format_xmr, parse_xmr};
use walletrpc_core::daemon::BlockId;
use walletrpc_core::types::{Destination, GetTransfersRequest, TransferRequest, UriDefinition};
use walletrpc_core::{CoreError, WalletRpcClient};

use crate::cli::Command;

/// Run one subcommand and render its result as JSON.
pub async fn run(client: &WalletRpcClient, command: Command) -> Result<Value, CoreError> {
    let output = match command {
        Command::Balance => {
            let b = client.get_balance().await?;
            json!({
                "balance": b.balance,
                "unlocked_balance": b.unlocked_balance,
                "balance_xmr": format_xmr(b.balance),
                "unlocked_balance_xmr": format_xmr(b.unlocked_balance),
            })
        }
        Command::Address => json!({ "address": client.get_address().await? }),
        Command::Height => json!({ "height": client.get_height().await? }),
        Command::Languages => json!({ "languages": client.get_languages().await? }),
        Command::Store => {
            client.store().await?;
            json!({ "stored": true })
        }
        Command::Transfers {
            incoming,
            out,
            pending,
            failed,
            pool,
        } => {
            let req = if incoming || out || pending || failed || pool {
                GetTransfersRequest {
                    incoming,
                    out,
                    pending,
                    failed,
                    pool,
                    ..GetTransfersRequest::default()
                }
            } else {
                GetTransfersRequest::all()
            };
            to_json(&client.get_transfers(&req).await?)?
        }
        Command::TransferByTxid { txid } => {
            json!({ "transfer": client.get_transfer_by_txid(&txid).await? })
        }
        Command::Payments { payment_id } => {
            json!({ "payments": client.get_payments(&payment_id).await? })
        }
        Command::Transfer {
            address,
            amount,
            priority,
            do_not_relay,
        } => {
            let req = TransferRequest {
                destinations: vec![Destination {
                    amount: parse_xmr(&amount)?,
                    address,
                }],
                priority,
                do_not_relay,
                get_tx_key: true,
                ..TransferRequest::default()
            };
            let resp = client.transfer(&req).await?;
            let mut value = to_json(&resp)?;
            value["fee_xmr"] = json!(format_xmr(resp.fee));
            value
        }
        Command::MakeUri {
            address,
            amount,
            payment_id,
            recipient_name,
            description,
        } => {
            let def = UriDefinition {
                address,
                amount: amount.as_deref().map(parse_xmr).transpose()?.unwrap_or(0),
                payment_id,
                recipient_name,
                tx_description: description,
            };
            json!({ "uri": client.make_uri(&def).await? })
        }
        Command::ParseUri { uri } => to_json(&client.parse_uri(&uri).await?)?,
        Command::StartMining {
            threads,
            background,
            ignore_battery,
        } => {
            client
                .start_mining(threads, background, ignore_battery)
                .await?;
            json!({ "mining": true })
        }
        Command::StopMining => {
            client.stop_mining().await?;
            json!({ "mining": false })
        }
        Command::LastBlockHeader => to_json(&client.get_last_block_header().await?)?,
        Command::Block { height, hash } => {
            let id = match (height, hash) {
                (Some(height), _) => BlockId::Height(height),
                (None, Some(hash)) => BlockId::Hash(hash),
                (None, None) => {
                    return Err(CoreError::InvalidParams(
                        "either --height or --hash is required".to_owned(),
                    ))
                }
            };
            to_json(&client.get_block(&id).await?)?
        }
    };
    Ok(output)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, CoreError> {
    serde_json::to_value(value).map_err(|e| CoreError::InvalidParams(format!("render output: {e}")))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use walletrpc_core::rpc::{HttpRequest, HttpResponse};
    use walletrpc_core::{ClientConfig, HttpTransport, RpcError};

    use super::*;

    /// Answers each method with a canned result and remembers the params.
    struct FakeTransport {
        sent: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl HttpTransport for FakeTransport {
        async fn post(&self, request: HttpRequest<'_>) -> Result<HttpResponse, RpcError> {
            let req: Value = serde_json::from_slice(request.body).expect("valid request JSON");
            self.sent.lock().unwrap().push(req.clone());
            let result = match req["method"].as_str().unwrap() {
                "getbalance" => json!({"balance": 1_500_000_000_000u64, "unlocked_balance": 0}),
                "transfer" => json!({"fee": 30_000_000u64, "tx_hash": "aa", "amount": 1}),
                "get_transfers" => json!({"in": [{"txid": "t1", "amount": 3, "type": "in"}]}),
                "getblock" => json!({
                    "blob": "00",
                    "block_header": {
                        "depth": 1, "difficulty": 2, "hash": "hh", "height": 5,
                        "major_version": 16, "minor_version": 16, "nonce": 0,
                        "orphan_status": false, "prev_hash": "pp", "reward": 6, "timestamp": 7
                    },
                    "json": "{}",
                    "status": "OK",
                }),
                _ => json!({}),
            };
            Ok(HttpResponse {
                status: 200,
                body: json!({"id": 0, "jsonrpc": "2.0", "result": result})
                    .to_string()
                    .into_bytes(),
            })
        }
    }

    fn fake_client() -> (WalletRpcClient, Arc<FakeTransport>) {
        let fake = Arc::new(FakeTransport {
            sent: Mutex::new(Vec::new()),
        });
        let client = WalletRpcClient::new(
            ClientConfig::new("http://fake/json_rpc").with_transport(fake.clone()),
        );
        (client, fake)
    }

    fn last_params(fake: &FakeTransport) -> Value {
        fake.sent.lock().unwrap().last().unwrap()["params"].clone()
    }

    #[tokio::test]
    async fn balance_includes_decimal_rendering() {
        let (client, _fake) = fake_client();
        let out = run(&client, Command::Balance).await.unwrap();
        assert_eq!(out["balance"], 1_500_000_000_000u64);
        assert_eq!(out["balance_xmr"], "1.5");
        assert_eq!(out["unlocked_balance_xmr"], "0");
    }

    #[tokio::test]
    async fn transfer_converts_xmr_to_atomic_units() {
        let (client, fake) = fake_client();
        let out = run(
            &client,
            Command::Transfer {
                address: "4A".into(),
                amount: "0.25".into(),
                priority: walletrpc_core::types::TransferPriority::Normal,
                do_not_relay: true,
            },
        )
        .await
        .unwrap();
        assert_eq!(out["fee_xmr"], "0.00003");

        let params = last_params(&fake);
        assert_eq!(params["destinations"][0]["amount"], 250_000_000_000u64);
        assert_eq!(params["priority"], 2);
        assert_eq!(params["do_not_relay"], true);
    }

    #[tokio::test]
    async fn transfer_rejects_bad_amount_before_sending() {
        let (client, fake) = fake_client();
        let err = run(
            &client,
            Command::Transfer {
                address: "4A".into(),
                amount: "-1".into(),
                priority: Default::default(),
                do_not_relay: false,
            },
        )
        .await
        .expect_err("negative amount must fail");
        assert!(matches!(err, CoreError::InvalidAmount { .. }));
        assert!(fake.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn transfers_without_flags_requests_everything() {
        let (client, fake) = fake_client();
        let out = run(
            &client,
            Command::Transfers {
                incoming: false,
                out: false,
                pending: false,
                failed: false,
                pool: false,
            },
        )
        .await
        .unwrap();
        assert_eq!(out["in"][0]["txid"], "t1");
        let params = last_params(&fake);
        assert_eq!(params["in"], true);
        assert_eq!(params["pool"], true);
    }

    #[tokio::test]
    async fn block_by_hash() {
        let (client, fake) = fake_client();
        let out = run(
            &client,
            Command::Block {
                height: None,
                hash: Some("hh".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(out["block_header"]["height"], 5);
        assert_eq!(last_params(&fake), json!({"hash": "hh"}));
    }

    #[tokio::test]
    async fn store_reports_success() {
        let (client, fake) = fake_client();
        let out = run(&client, Command::Store).await.unwrap();
        assert_eq!(out, json!({"stored": true}));
        assert!(last_params(&fake).is_null());
    }
}

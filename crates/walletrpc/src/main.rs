mod cli;
mod commands;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};

use walletrpc_core::rpc::ReqwestTransport;
use walletrpc_core::{ClientConfig, CoreError, RpcError, WalletRpcClient};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let mut config = ClientConfig::new(&args.rpc_url);
    config.custom_headers.extend(args.headers.iter().cloned());
    if let Some(secs) = args.timeout_secs {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(secs))
            .build()
            .context("build HTTP client")?;
        config.transport = Some(Arc::new(ReqwestTransport::with_client(client)));
    }
    let client = WalletRpcClient::new(config);
    tracing::debug!(url = %args.rpc_url, headers = args.headers.len(), "wallet client ready");

    let output = commands::run(&client, args.command).await.map_err(|err| {
        let message = format_rpc_error(&args.rpc_url, &err);
        eyre!(message).wrap_err("wallet RPC call failed")
    })?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render output")?
    );
    Ok(())
}

fn format_rpc_error(rpc_url: &str, err: &CoreError) -> String {
    let mut lines = vec![
        format!("endpoint: `{rpc_url}`"),
        format!("error: {err}"),
    ];

    match err {
        CoreError::Rpc(RpcError::Transport(source)) => {
            let source = source.to_string();
            if source.contains("dns error") {
                lines.push(
                    "hint: hostname resolution failed; verify the endpoint hostname and your DNS/network"
                        .into(),
                );
            } else if source.contains("tls") || source.contains("certificate") {
                lines.push(
                    "hint: TLS handshake failed; verify certificate trust and that the endpoint uses HTTPS"
                        .into(),
                );
            } else {
                lines.push(
                    "hint: request could not be sent; verify the URL and that monero-wallet-rpc is running"
                        .into(),
                );
            }
        }
        CoreError::Rpc(RpcError::HttpStatus { status: 401 | 403 }) => {
            lines.push(
                "hint: authentication failed; run monero-wallet-rpc with --disable-rpc-login"
                    .into(),
            );
            lines.push(
                "hint: digest auth is unsupported; use a proxy that accepts --header".into(),
            );
        }
        CoreError::Rpc(RpcError::HttpStatus { status: 404 }) => {
            lines.push(
                "hint: endpoint path is invalid; the JSON-RPC path is usually `/json_rpc`".into(),
            );
        }
        CoreError::Rpc(RpcError::ServerError { code: -13, .. }) => {
            lines.push(
                "hint: no wallet is open; start the server with --wallet-file or call open_wallet"
                    .into(),
            );
        }
        _ => {}
    }

    lines.join("\n")
}

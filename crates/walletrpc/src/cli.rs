use clap::{Parser, Subcommand};

use walletrpc_core::types::TransferPriority;

/// Call a Monero wallet (or daemon) JSON-RPC endpoint from the shell.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// JSON-RPC endpoint URL.
    #[arg(
        long,
        default_value = "http://127.0.0.1:18082/json_rpc",
        env = "WALLETRPC_URL"
    )]
    pub rpc_url: String,

    /// Extra HTTP header sent with every call, as `NAME=VALUE` (repeatable).
    #[arg(long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Whole-request timeout in seconds. Unset means wait indefinitely.
    #[arg(long, env = "WALLETRPC_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Total and unlocked balance.
    Balance,
    /// Primary wallet address.
    Address,
    /// Wallet sync height.
    Height,
    /// Seed languages supported by the wallet.
    Languages,
    /// Save the wallet file.
    Store,
    /// List transfers. With no category flags, every category is listed.
    Transfers {
        #[arg(long = "in")]
        incoming: bool,
        #[arg(long)]
        out: bool,
        #[arg(long)]
        pending: bool,
        #[arg(long)]
        failed: bool,
        #[arg(long)]
        pool: bool,
    },
    /// Look up a single transfer by transaction id.
    TransferByTxid { txid: String },
    /// Incoming payments for a payment id.
    Payments { payment_id: String },
    /// Send XMR to one address.
    Transfer {
        #[arg(long)]
        address: String,
        /// Amount in XMR, e.g. `0.25`.
        #[arg(long)]
        amount: String,
        /// Fee priority, 0 (default) to 3 (elevated).
        #[arg(long, default_value = "0", value_parser = parse_priority)]
        priority: TransferPriority,
        /// Build and sign but do not broadcast.
        #[arg(long)]
        do_not_relay: bool,
    },
    /// Build a `monero:` payment URI.
    MakeUri {
        #[arg(long)]
        address: String,
        /// Amount in XMR.
        #[arg(long)]
        amount: Option<String>,
        #[arg(long, default_value = "")]
        payment_id: String,
        #[arg(long, default_value = "")]
        recipient_name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Decode a `monero:` payment URI.
    ParseUri { uri: String },
    /// Start mining to this wallet on the connected daemon.
    StartMining {
        #[arg(long, default_value = "1")]
        threads: u32,
        #[arg(long)]
        background: bool,
        #[arg(long)]
        ignore_battery: bool,
    },
    /// Stop mining.
    StopMining,
    /// Header of the chain tip (daemon endpoint).
    LastBlockHeader,
    /// Fetch a block by height or hash (daemon endpoint).
    Block {
        #[arg(long, conflicts_with = "hash", required_unless_present = "hash")]
        height: Option<u64>,
        #[arg(long)]
        hash: Option<String>,
    },
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("header `{raw}` must be formatted as NAME=VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header `{raw}` has an empty name"));
    }
    Ok((name.to_owned(), value.to_owned()))
}

fn parse_priority(raw: &str) -> Result<TransferPriority, String> {
    let n: u32 = raw
        .parse()
        .map_err(|e| format!("priority must be a number: {e}"))?;
    TransferPriority::try_from(n)
}

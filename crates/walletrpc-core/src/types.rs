//! Wire types for the wallet JSON-RPC interface.
//!
//! Field names follow the JSON the wallet emits. Amounts are atomic units
//! (see [`crate::amount`]). List fields default to empty because the wallet
//! omits empty arrays from its responses.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Balance
// ==============================================================================

/// Result of `getbalance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: u64,
    pub unlocked_balance: u64,
}

// ==============================================================================
// Outgoing Payments
// ==============================================================================

/// A single payment output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub amount: u64,
    pub address: String,
}

/// Fee priority accepted by `transfer`, `transfer_split`, and `sweep_all`.
///
/// Encoded as the bare integer the wallet expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum TransferPriority {
    #[default]
    Default,
    Unimportant,
    Normal,
    Elevated,
}

impl From<TransferPriority> for u32 {
    fn from(p: TransferPriority) -> Self {
        match p {
            TransferPriority::Default => 0,
            TransferPriority::Unimportant => 1,
            TransferPriority::Normal => 2,
            TransferPriority::Elevated => 3,
        }
    }
}

impl TryFrom<u32> for TransferPriority {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Default),
            1 => Ok(Self::Unimportant),
            2 => Ok(Self::Normal),
            3 => Ok(Self::Elevated),
            other => Err(format!("transfer priority must be 0-3, got {other}")),
        }
    }
}

/// Parameters of `transfer` and `transfer_split`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub destinations: Vec<Destination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixin: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_size: Option<u64>,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub get_tx_key: bool,
    #[serde(default)]
    pub priority: TransferPriority,
    #[serde(default)]
    pub do_not_relay: bool,
    #[serde(default)]
    pub get_tx_hex: bool,
}

/// Result of `transfer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResponse {
    #[serde(default)]
    pub amount: u64,
    pub fee: u64,
    pub tx_hash: String,
    #[serde(default)]
    pub tx_key: String,
    #[serde(default)]
    pub tx_blob: String,
}

/// Result of `transfer_split`. Lists are parallel, one entry per transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSplitResponse {
    #[serde(default)]
    pub amount_list: Vec<u64>,
    #[serde(default)]
    pub fee_list: Vec<u64>,
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
    #[serde(default)]
    pub tx_key_list: Vec<String>,
    #[serde(default)]
    pub tx_blob_list: Vec<String>,
}

/// Parameters of `sweep_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepAllRequest {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_index: Option<u32>,
    #[serde(default)]
    pub priority: TransferPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixin: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_size: Option<u64>,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub get_tx_keys: bool,
    /// Only outputs below this amount are swept; `None` sweeps everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below_amount: Option<u64>,
    #[serde(default)]
    pub do_not_relay: bool,
    #[serde(default)]
    pub get_tx_hex: bool,
}

/// Result of `sweep_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepAllResponse {
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
    #[serde(default)]
    pub tx_key_list: Vec<String>,
    #[serde(default)]
    pub amount_list: Vec<u64>,
    #[serde(default)]
    pub fee_list: Vec<u64>,
    #[serde(default)]
    pub tx_blob_list: Vec<String>,
}

// ==============================================================================
// History
// ==============================================================================

/// An incoming payment matched by payment id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub tx_hash: String,
    pub amount: u64,
    pub block_height: u64,
    #[serde(default)]
    pub unlock_time: u64,
}

/// Direction/state of a [`Transfer`], from its `type` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    In,
    Out,
    Pending,
    Failed,
    Pool,
    /// Coinbase output credited by a mined block.
    Block,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Parameters of `get_transfers`: which categories to include and an
/// optional height window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransfersRequest {
    #[serde(rename = "in", default)]
    pub incoming: bool,
    #[serde(default)]
    pub out: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub pool: bool,
    #[serde(default)]
    pub filter_by_height: bool,
    #[serde(default)]
    pub min_height: u64,
    #[serde(default)]
    pub max_height: u64,
}

impl GetTransfersRequest {
    /// Request every category with no height filter.
    pub fn all() -> Self {
        Self {
            incoming: true,
            out: true,
            pending: true,
            failed: true,
            pool: true,
            ..Self::default()
        }
    }
}

/// Result of `get_transfers`, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransfersResponse {
    #[serde(rename = "in", default)]
    pub incoming: Vec<Transfer>,
    #[serde(default)]
    pub out: Vec<Transfer>,
    #[serde(default)]
    pub pending: Vec<Transfer>,
    #[serde(default)]
    pub failed: Vec<Transfer>,
    #[serde(default)]
    pub pool: Vec<Transfer>,
}

/// A wallet transfer as reported by `get_transfers` and
/// `get_transfer_by_txid`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub txid: String,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub timestamp: u64,
    pub amount: u64,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(rename = "type", default)]
    pub kind: TransferKind,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default)]
    pub confirmations: u64,
}

/// Output filter for `incoming_transfers`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    #[default]
    All,
    Available,
    Unavailable,
}

/// An owned output from `incoming_transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingTransfer {
    pub amount: u64,
    pub spent: bool,
    pub global_index: u64,
    pub tx_hash: String,
    #[serde(default)]
    pub tx_size: u64,
    #[serde(default)]
    pub key_image: String,
}

// ==============================================================================
// Keys
// ==============================================================================

/// Which secret `query_key` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKeyType {
    Mnemonic,
    ViewKey,
    SpendKey,
}

/// A key image with the signature proving ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedKeyImage {
    pub key_image: String,
    pub signature: String,
}

/// Result of `import_key_images`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportKeyImagesResponse {
    pub height: u64,
    pub spent: u64,
    pub unspent: u64,
}

// ==============================================================================
// Addresses
// ==============================================================================

/// Result of `split_integrated_address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegratedAddress {
    pub standard_address: String,
    pub payment_id: String,
}

/// Structured form of a `monero:` payment URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriDefinition {
    pub address: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub tx_description: String,
}

/// An address book row. `index` is assigned by the wallet and ignored when
/// adding an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookEntry {
    pub address: String,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
}

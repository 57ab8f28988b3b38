//! Wallet data types: identifiers, request bodies, and result payloads.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Decentralized identifier of a wallet, asset, or POE record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Did(pub String);

impl Did {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty or blank.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Did {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Did {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Request bodies that name identifiers the service cannot do without.
pub trait RequiredFields {
    /// `(field name, value)` pairs that must be non-empty.
    fn required_fields(&self) -> Vec<(&'static str, &Did)>;
}

/// Fail with [`WalletError::Precondition`] on the first empty required field.
pub fn check_required<B: RequiredFields>(body: &B) -> Result<(), WalletError> {
    match body.required_fields().into_iter().find(|(_, id)| id.is_empty()) {
        Some((name, _)) => Err(WalletError::Precondition(format!("{name} must be set"))),
        None => Ok(()),
    }
}

/// Transaction fee paid from the sender's UTXOs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fee {
    /// Fee amount.
    #[serde(default)]
    pub amount: i64,
}

/// Issue colored tokens against a digital asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueBody {
    /// Issuing wallet.
    pub issuer: Did,
    /// Wallet that receives the tokens.
    pub owner: Did,
    /// Asset the tokens are bound to.
    pub asset_id: Did,
    /// Number of tokens.
    pub amount: i64,
    /// Optional fee.
    #[serde(rename = "fees", default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

impl RequiredFields for IssueBody {
    fn required_fields(&self) -> Vec<(&'static str, &Did)> {
        vec![("issuer", &self.issuer), ("owner", &self.owner), ("asset_id", &self.asset_id)]
    }
}

/// Issue a digital asset to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAssetBody {
    /// Issuing wallet.
    pub issuer: Did,
    /// Wallet that receives the asset.
    pub owner: Did,
    /// Asset to issue.
    pub asset_id: Did,
    /// Optional fee.
    #[serde(rename = "fees", default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

impl RequiredFields for IssueAssetBody {
    fn required_fields(&self) -> Vec<(&'static str, &Did)> {
        vec![("issuer", &self.issuer), ("owner", &self.owner), ("asset_id", &self.asset_id)]
    }
}

/// Amount of one colored token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    /// Colored token ID.
    pub token_id: String,
    /// Amount to move.
    pub amount: i64,
}

/// Transfer colored tokens between wallets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBody {
    /// Sending wallet.
    pub from: Did,
    /// Receiving wallet.
    pub to: Did,
    /// Asset the tokens belong to.
    pub asset_id: Did,
    /// Tokens to transfer.
    pub tokens: Vec<TokenAmount>,
    /// Optional fee.
    #[serde(rename = "fees", default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

impl RequiredFields for TransferBody {
    fn required_fields(&self) -> Vec<(&'static str, &Did)> {
        vec![("from", &self.from), ("to", &self.to), ("asset_id", &self.asset_id)]
    }
}

/// Transfer digital assets between wallets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferAssetBody {
    /// Sending wallet.
    pub from: Did,
    /// Receiving wallet.
    pub to: Did,
    /// Assets to transfer.
    pub assets: Vec<Did>,
    /// Optional fee.
    #[serde(rename = "fees", default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

impl RequiredFields for TransferAssetBody {
    fn required_fields(&self) -> Vec<(&'static str, &Did)> {
        static NO_ASSETS: Did = Did(String::new());

        let mut fields = vec![("from", &self.from), ("to", &self.to)];
        if self.assets.is_empty() {
            fields.push(("assets", &NO_ASSETS));
        }
        fields.extend(self.assets.iter().map(|asset| ("assets", asset)));
        fields
    }
}

/// Result of issue, transfer, and POE create/update calls.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalletResponse {
    /// ID of the created or affected object.
    #[serde(default)]
    pub id: Did,
    /// Service endpoint that handled the call.
    #[serde(default)]
    pub endpoint: String,
    /// Colored token ID, for token issuance.
    #[serde(default)]
    pub token_id: String,
    /// Ledger transaction IDs produced by the call.
    #[serde(default)]
    pub transaction_ids: Vec<String>,
    /// Creation time (unix seconds).
    #[serde(default)]
    pub created: i64,
}

/// Direction of transaction logs to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    /// Income: outputs received by the wallet.
    In,
    /// Spending: outputs spent by the wallet.
    Out,
}

impl LogType {
    /// Query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::In => "in",
            LogType::Out => "out",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unspent transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Utxo {
    /// Hash of the transaction data that created this output.
    #[serde(default)]
    pub source_tx_data_hash: String,
    /// Output index within that transaction.
    #[serde(default)]
    pub ix: u32,
    /// Colored token or asset ID carried by the output.
    #[serde(default)]
    pub ctoken_id: String,
    /// Kind of value carried (token or asset).
    #[serde(default)]
    pub c_type: i32,
    /// Amount carried.
    #[serde(default)]
    pub amount: i64,
    /// Locking script (base64).
    #[serde(default)]
    pub script: String,
    /// Wallet that created the output.
    #[serde(default)]
    pub founder: Did,
    /// Creation time (unix seconds).
    #[serde(default)]
    pub created_at: i64,
    /// Expiry time (unix seconds), zero for none.
    #[serde(default)]
    pub expired_at: i64,
}

/// Spent transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stxo {
    /// The output that was spent.
    #[serde(flatten)]
    pub utxo: Utxo,
    /// Transaction that spent it.
    #[serde(default)]
    pub spent_txid: String,
    /// Spend time (unix seconds).
    #[serde(default)]
    pub spent_at: i64,
}

/// Transaction outputs of one wallet endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionLog {
    /// Unspent outputs.
    #[serde(default)]
    pub utxo: Vec<Utxo>,
    /// Spent outputs.
    #[serde(default)]
    pub stxo: Vec<Stxo>,
}

/// Transaction logs keyed by wallet endpoint.
pub type TransactionLogs = BTreeMap<String, TransactionLog>;

/// Key/value property of a POE record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoeProperty {
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: String,
}

/// Create or update a POE record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoeBody {
    /// Record ID. Assigned by the service on create, required on update.
    #[serde(default, skip_serializing_if = "Did::is_empty")]
    pub id: Did,
    /// Record name.
    pub name: String,
    /// Parent record, if any.
    #[serde(default, skip_serializing_if = "Did::is_empty")]
    pub parent_id: Did,
    /// Owning wallet.
    pub owner: Did,
    /// Content hash of the evidenced data.
    #[serde(default)]
    pub hash: String,
    /// Opaque metadata (base64).
    #[serde(default)]
    pub metadata: String,
    /// Additional properties.
    #[serde(default)]
    pub properties: Vec<PoeProperty>,
}

impl RequiredFields for PoeBody {
    fn required_fields(&self) -> Vec<(&'static str, &Did)> {
        vec![("owner", &self.owner)]
    }
}

/// Off-chain file attached to a POE record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OffchainMetadata {
    /// Original file name.
    #[serde(default)]
    pub filename: String,
    /// Where the file is stored.
    #[serde(default)]
    pub endpoint: String,
    /// Upload time (unix seconds).
    #[serde(default)]
    pub storage_time: i64,
    /// File size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Hash of the file content.
    #[serde(default)]
    pub content_hash: String,
    /// Whether the file may be replaced.
    #[serde(default)]
    pub read_only: bool,
}

/// POE record returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoePayload {
    /// Record ID.
    #[serde(default)]
    pub id: Did,
    /// Record name.
    #[serde(default)]
    pub name: String,
    /// Parent record.
    #[serde(default)]
    pub parent_id: Did,
    /// Owning wallet.
    #[serde(default)]
    pub owner: Did,
    /// Content hash.
    #[serde(default)]
    pub hash: String,
    /// Opaque metadata (base64).
    #[serde(default)]
    pub metadata: String,
    /// Additional properties.
    #[serde(default)]
    pub properties: Vec<PoeProperty>,
    /// Attached off-chain files.
    #[serde(default)]
    pub offchain_metadata: Vec<OffchainMetadata>,
    /// Record status.
    #[serde(default)]
    pub status: String,
    /// Creation time (unix seconds).
    #[serde(default)]
    pub created: i64,
    /// Last update time (unix seconds).
    #[serde(default)]
    pub updated: i64,
}

/// Result of a POE file upload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    /// POE record the file was attached to.
    #[serde(default)]
    pub poe_id: Did,
    /// Whether the file was stored read-only.
    #[serde(default)]
    pub read_only: bool,
    /// Ledger transaction IDs produced by the upload.
    #[serde(default)]
    pub transaction_ids: Vec<String>,
}

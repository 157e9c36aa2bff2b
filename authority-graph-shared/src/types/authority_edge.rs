//! Normalized edge representation of one authority event.
use serde::{Deserialize, Serialize};

/// Placeholder revocation verdict attached to every edge.
///
/// Whether an authority grant can still be revoked is computed by the
/// downstream risk analyzer; this stage always emits `Unknown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationStatus {
    #[default]
    Unknown,
}

/// A single normalized authority edge, owned by its parent `WalletGraph`.
///
/// Every field except `amount` is copied unchanged from the source event.
/// `amount` carries the normalized string form, `"unlimited"` for grants
/// with no practical upper bound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityEdge {
    #[serde(rename = "type")]
    pub authority_type: String,
    pub contract: String,
    pub target_entity: String,
    pub amount: String,
    pub block: u64,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_index: Option<u64>,
    pub revocation_possible: RevocationStatus,
}

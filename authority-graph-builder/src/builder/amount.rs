//! Amount normalization for authority edges.
use authority_graph_shared::types::AmountValue;

/// Decimal form of 2^256 - 1, the on-chain convention for an unlimited
/// ERC-20 approval.
pub(crate) const MAX_UINT256_DECIMAL: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

/// Canonical string emitted for approvals with no practical upper bound.
pub(crate) const UNLIMITED: &str = "unlimited";

/// Normalizes a raw `amount` value to its canonical string form.
///
/// A null or missing amount, the `MAX_UINT`/`UNLIMITED` markers (matched
/// case-insensitively), and any value containing the decimal form of
/// 2^256 - 1 as a substring all collapse to `"unlimited"`. Every other value
/// keeps its original string form, so amounts larger than any fixed-width
/// integer survive with full precision.
///
/// Normalization is idempotent: applying it to an already-normalized amount
/// is a no-op.
pub fn normalize_amount(amount: &AmountValue) -> String {
    let Some(raw) = amount.to_raw_string() else {
        return UNLIMITED.to_string();
    };

    let upper = raw.to_uppercase();
    if upper == "MAX_UINT" || upper == "UNLIMITED" || upper.contains(MAX_UINT256_DECIMAL) {
        return UNLIMITED.to_string();
    }

    if raw == "0" {
        return "0".to_string();
    }

    raw
}

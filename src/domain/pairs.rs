//! Truncation of the upstream `pairs` list.

use serde_json::Value;

/// Hard upper bound on the number of pairs returned by list routes.
pub const MAX_PAIRS: i64 = 100;

/// Keeps at most `min(limit, MAX_PAIRS)` entries of the top-level `pairs`
/// array, preserving order.
///
/// A `limit` of zero or below empties the list. Payloads without a `pairs`
/// field, or where it is not an array, are returned untouched.
#[must_use]
pub fn truncate_pairs(mut payload: Value, limit: i64) -> Value {
    if let Some(Value::Array(pairs)) = payload.get_mut("pairs") {
        let keep = usize::try_from(limit.min(MAX_PAIRS)).unwrap_or(0);
        pairs.truncate(keep);
    }
    payload
}

//! Serde helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Pair with `#[serde(default)]` on an `Option<Option<T>>` field:
///
/// - key missing -> `None` (leave the column untouched)
/// - `null`      -> `Some(None)` (clear the column)
/// - value       -> `Some(Some(value))`
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

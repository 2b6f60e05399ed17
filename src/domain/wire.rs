//! Decoding helpers for bark's wire records.
//!
//! Bark may omit a field or send `null` where a value is expected. Both decode
//! as the field's zero value so one odd record cannot fail a whole response.

use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`. Pair with `#[serde(default)]` to cover
/// absent fields too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

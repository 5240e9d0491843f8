//! Deserialization helpers shared by the models.

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing key.
///
/// Pair with `#[serde(default)]` so both cases land on `T::default()`.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

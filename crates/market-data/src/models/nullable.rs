use serde::{Deserialize, Deserializer};

/// Deserializes a field that the provider may send as `null`, falling back
/// to the type's default. Pair with `#[serde(default)]` so that a missing
/// field behaves the same way.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

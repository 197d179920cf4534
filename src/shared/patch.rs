//! Deserialization helper for partial-update payloads.
//!
//! Update DTOs model nullable fields as `Option<Option<T>>`: the outer
//! `Option` tracks whether the field appeared in the payload at all, the
//! inner one carries an explicit JSON null. Serde collapses both cases to
//! `None` by default, so fields opt into [`double_option`] together with
//! `#[serde(default)]`.

use serde::{Deserialize, Deserializer};

/// Use with `#[serde(default, deserialize_with = "double_option")]`.
///
/// An absent field stays `None` (via the serde default); a present field,
/// including an explicit null, becomes `Some(...)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

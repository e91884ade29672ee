//! Record shapes decoded from the JSON data files.
//!
//! Decoding is lenient: absent fields take their empty value and `null` is accepted
//! wherever a value is optional, so a record whose only defect is a missing field still
//! loads and is judged by the seed stages instead of failing the whole file.

pub mod character;
pub mod conflict;
pub mod connection;
pub mod creator;
pub mod edition;
pub mod era;
pub mod event;
pub mod reading_path;
pub mod resource;
pub mod retailer;
pub mod story_arc;

pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};

    /// Treats `null` and blank strings as absent.
    pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
    }

    /// Treats `null` as the type's default value.
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

//! Publishing era records.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

/// Entry of `eras.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EraRecord {
    pub slug: String,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub year_start: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub year_end: i32,
    #[serde(deserialize_with = "blank_as_none")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub color: Option<String>,
}

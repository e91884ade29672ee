//! Retailer records.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

/// Entry of `retailers.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetailerRecord {
    pub slug: String,
    pub name: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub url: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_digital: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ships_international: bool,
}

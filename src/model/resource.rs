//! External resource records.

use serde::Deserialize;

use crate::model::lenient::blank_as_none;

/// Entry of `resources.json`. Resources have no slug and are keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceRecord {
    pub name: String,
    pub resource_type: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub url: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub focus: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub best_for: Option<String>,
}

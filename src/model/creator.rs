//! Creator records.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

/// Entry of `creators.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreatorRecord {
    pub slug: String,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub active_years: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub bio: Option<String>,
}

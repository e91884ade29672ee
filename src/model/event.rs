//! Crossover event records.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

/// Entry of `events.json`. The era reference is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    pub slug: String,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(deserialize_with = "blank_as_none")]
    pub core_issues: Option<String>,
    pub importance: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub synopsis: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub impact: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub prerequisites: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub consequences: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub era_slug: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

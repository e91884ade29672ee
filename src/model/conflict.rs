//! Continuity conflict records.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

/// Entry of `continuity_conflicts.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContinuityConflictRecord {
    pub slug: String,
    pub title: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub official_stance: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub fan_interpretation: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub editorial_context: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub source_citations: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

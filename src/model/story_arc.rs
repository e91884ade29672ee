//! Story arc records.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

/// Entry of `story_arcs.json`. The era reference is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoryArcRecord {
    pub slug: String,
    pub name: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub issues: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub era_slug: Option<String>,
    pub importance: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub synopsis: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

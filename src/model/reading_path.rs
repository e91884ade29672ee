//! Reading path records and their ordered entries.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

/// Entry of `reading_paths.json` with its ordered entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReadingPathRecord {
    pub slug: String,
    pub name: String,
    pub path_type: String,
    pub difficulty: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub estimated_issues: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub entries: Vec<ReadingPathEntryRecord>,
}

/// One step of a reading path. `position` is unique within its path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReadingPathEntryRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub position: i32,
    pub edition_slug: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub note: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_optional: bool,
}

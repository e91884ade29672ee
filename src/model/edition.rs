//! Collected edition records and their creator credits.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

/// Role recorded for an edition creator whose role is left blank.
pub static DEFAULT_CREATOR_ROLE: &str = "writer";

/// Entry of `collected_editions.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CollectedEditionRecord {
    pub slug: String,
    pub title: String,
    pub format: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub issues_collected: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub issue_count: i32,
    pub print_status: String,
    pub importance: String,
    pub era_slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creators: Vec<EditionCreatorRecord>,
    #[serde(deserialize_with = "blank_as_none")]
    pub synopsis: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub connection_notes: Option<String>,
}

/// Creator credit embedded in a collected edition, identified by display name only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditionCreatorRecord {
    pub name: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub role: Option<String>,
}

impl EditionCreatorRecord {
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_CREATOR_ROLE)
    }
}

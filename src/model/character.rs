//! Character records.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

/// Universe assigned to characters that do not name one.
pub static DEFAULT_UNIVERSE: &str = "Earth-616";

/// Entry of `characters.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CharacterRecord {
    pub slug: String,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub first_appearance_issue: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub universe: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub teams: Vec<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub description: Option<String>,
}

impl CharacterRecord {
    pub fn universe(&self) -> &str {
        self.universe.as_deref().unwrap_or(DEFAULT_UNIVERSE)
    }
}

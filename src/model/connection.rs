//! Records linking two catalog entries.

use serde::Deserialize;

use crate::model::lenient::{blank_as_none, null_as_default};

const DEFAULT_STRENGTH: i32 = 5;
const DEFAULT_CONFIDENCE: i32 = 80;
static DEFAULT_INTERPRETATION: &str = "official";

/// Entry of `connections.json`: a typed link between two collected editions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectionRecord {
    pub source_type: String,
    pub source_slug: String,
    pub target_type: String,
    pub target_slug: String,
    pub connection_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub strength: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: i32,
    #[serde(deserialize_with = "blank_as_none")]
    pub interpretation: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub citation: Option<String>,
}

impl ConnectionRecord {
    /// Link strength; zero means unspecified.
    pub fn strength(&self) -> i32 {
        if self.strength == 0 {
            DEFAULT_STRENGTH
        } else {
            self.strength
        }
    }

    /// Confidence percentage; zero means unspecified.
    pub fn confidence(&self) -> i32 {
        if self.confidence == 0 {
            DEFAULT_CONFIDENCE
        } else {
            self.confidence
        }
    }

    pub fn interpretation(&self) -> &str {
        self.interpretation
            .as_deref()
            .unwrap_or(DEFAULT_INTERPRETATION)
    }

    /// Identifies the link in log output.
    pub fn key(&self) -> String {
        format!(
            "{} -[{}]-> {}",
            self.source_slug, self.connection_type, self.target_slug
        )
    }
}

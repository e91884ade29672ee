//! Slug to row id maps shared between stages.

use std::collections::HashMap;

/// Slug to generated ID maps shared between stages of a single run.
///
/// Populated as records are persisted and read by later stages to resolve references.
/// Maps only ever grow during a run.
#[derive(Debug, Default)]
pub struct SeedContext {
    pub era_ids: HashMap<String, i32>,
    pub creator_ids: HashMap<String, i32>,
    pub edition_ids: HashMap<String, i32>,
}

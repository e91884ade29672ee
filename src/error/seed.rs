//! Errors that end a seed run.

use sea_orm::DbErr;
use thiserror::Error;

use crate::{error::load::LoadError, seed::stage::Stage};

/// Failure that leaves the dependency chain unusable and aborts the run.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to load {stage} data: {source}")]
    Load {
        stage: Stage,
        #[source]
        source: LoadError,
    },
    #[error("Failed to persist {stage} record '{key}': {source}")]
    Persist {
        stage: Stage,
        key: String,
        #[source]
        source: DbErr,
    },
}

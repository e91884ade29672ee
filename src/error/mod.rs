//! Error types for the seed loader.
//!
//! Domain errors live in submodules and are aggregated into [`Error`], which is what the
//! binary reports before exiting with a failure status.

pub mod config;
pub mod load;
pub mod seed;

use thiserror::Error;

use crate::error::{config::ConfigError, seed::SeedError};

/// Top-level error for a seed run.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Fatal failure while running a seed stage.
    #[error(transparent)]
    SeedError(#[from] SeedError),
    /// Database error raised while connecting or migrating.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

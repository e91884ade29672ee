//! Data file loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or decode a JSON data file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the data file that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

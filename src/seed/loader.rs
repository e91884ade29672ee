//! Reading and decoding of a single data file.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::load::LoadError;

/// Read a JSON array file and decode it into records, preserving file order.
///
/// # Arguments
/// - `path`: Path of the data file
///
/// # Returns
/// - `Ok(Vec<T>)`: Decoded records in file order
/// - `Err(LoadError::Read)`: The file is missing or unreadable
/// - `Err(LoadError::Decode)`: The file is not a JSON array of `T`
pub async fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

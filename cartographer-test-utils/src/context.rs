//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and a temporary directory standing in for the seed data directory.

use std::path::{Path, PathBuf};

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
};
use tempfile::TempDir;

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_seed_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Write a data file the seed pipeline will read
/// test.write_data_file("eras.json", &serde_json::json!([]))?;
///
/// // Access fixture helpers
/// test.catalog().insert_mock_era("silver-age").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Temporary data directory, removed when the context is dropped
    pub(crate) data_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with an empty database and an empty data directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::Io)` - Temporary directory could not be created
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let data_dir = tempfile::tempdir()?;

        Ok(TestContext { db, data_dir })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Path of the temporary data directory
    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }

    /// Serialize `contents` as pretty JSON into `file_name` within the data directory.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the written file
    /// - `Err(TestError::Json)` - Serialization failed
    /// - `Err(TestError::Io)` - Writing the file failed
    pub fn write_data_file(
        &self,
        file_name: &str,
        contents: &serde_json::Value,
    ) -> Result<PathBuf, TestError> {
        let path = self.data_dir.path().join(file_name);
        std::fs::write(&path, serde_json::to_vec_pretty(contents)?)?;

        Ok(path)
    }

    /// Write raw text into `file_name` within the data directory, for malformed-file cases.
    pub fn write_raw_data_file(&self, file_name: &str, contents: &str) -> Result<PathBuf, TestError> {
        let path = self.data_dir.path().join(file_name);
        std::fs::write(&path, contents)?;

        Ok(path)
    }

    /// Count rows currently stored for an entity.
    pub async fn count<E>(&self, _entity: E) -> Result<u64, TestError>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        Ok(E::find().count(&self.db).await?)
    }
}

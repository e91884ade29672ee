//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Calls are queued and run in order during the final `build()` call: tables first, then
//! database fixtures, then data files.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityName, EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// catalog fixtures and seed data files. Methods can be chained together and finalized
/// with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_seed_tables: bool,
    excluded_seed_tables: Vec<&'static str>,

    // Database fixtures to insert
    eras: Vec<String>,
    creators: Vec<String>,
    editions: Vec<(String, String)>, // (edition_slug, era_slug)

    // Files to write into the data directory
    data_files: Vec<(String, serde_json::Value)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures or data files configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_seed_tables: false,
            excluded_seed_tables: Vec::new(),
            eras: Vec::new(),
            creators: Vec::new(),
            editions: Vec::new(),
            data_files: Vec::new(),
        }
    }

    /// Add every table written by the seed pipeline, in foreign key order.
    ///
    /// Also creates the unique index on connection endpoints, which the entity
    /// definition alone does not carry.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_seed_tables(mut self) -> Self {
        self.include_seed_tables = true;
        self
    }

    /// Leave `entity`'s table out of the tables added by `with_seed_tables`.
    ///
    /// Writes to the missing table fail at runtime, which lets tests drive the pipeline's
    /// database failure handling. Only tables no other seed table references can be left out.
    pub fn without_seed_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.excluded_seed_tables.push(entity.table_name());
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables; parents must be added before children.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cartographer_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), cartographer_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Era)
    ///     .with_table(CollectedEdition)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock era into the database during `build()`.
    pub fn with_mock_era(mut self, slug: &str) -> Self {
        self.eras.push(slug.to_string());
        self
    }

    /// Insert a mock creator into the database during `build()`.
    pub fn with_mock_creator(mut self, slug: &str) -> Self {
        self.creators.push(slug.to_string());
        self
    }

    /// Insert a mock collected edition into the database during `build()`.
    ///
    /// The era is created first if it does not exist.
    pub fn with_mock_edition(mut self, slug: &str, era_slug: &str) -> Self {
        self.editions.push((slug.to_string(), era_slug.to_string()));
        self
    }

    /// Write `contents` as `file_name` into the test data directory during `build()`.
    ///
    /// # Arguments
    /// - `file_name` - File name relative to the data directory, e.g. `eras.json`
    /// - `contents` - JSON document to write, usually a `serde_json::json!` array of records
    pub fn with_data_file(mut self, file_name: &str, contents: serde_json::Value) -> Self {
        self.data_files.push((file_name.to_string(), contents));
        self
    }

    /// Build the test context, executing all queued configuration.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::Io)` / `Err(TestError::Json)` - Writing a data file failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut indexes = Vec::new();

        if self.include_seed_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            let seed_tables = vec![
                seed_table(&schema, entity::prelude::Era),
                seed_table(&schema, entity::prelude::Creator),
                seed_table(&schema, entity::prelude::Character),
                seed_table(&schema, entity::prelude::CollectedEdition),
                seed_table(&schema, entity::prelude::EditionCreator),
                seed_table(&schema, entity::prelude::Connection),
                seed_table(&schema, entity::prelude::ContinuityConflict),
                seed_table(&schema, entity::prelude::StoryArc),
                seed_table(&schema, entity::prelude::Event),
                seed_table(&schema, entity::prelude::ReadingPath),
                seed_table(&schema, entity::prelude::ReadingPathEntry),
                seed_table(&schema, entity::prelude::Retailer),
                seed_table(&schema, entity::prelude::Resource),
            ];
            all_tables.extend(
                seed_tables
                    .into_iter()
                    .filter(|(name, _)| !self.excluded_seed_tables.contains(name))
                    .map(|(_, table)| table),
            );

            if !self
                .excluded_seed_tables
                .contains(&entity::prelude::Connection.table_name())
            {
                indexes.push(connection_endpoints_index());
            }
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(indexes).await?;

        // 2. Insert database fixtures
        for slug in self.eras {
            setup.catalog().insert_mock_era(&slug).await?;
        }

        for slug in self.creators {
            setup.catalog().insert_mock_creator(&slug).await?;
        }

        for (slug, era_slug) in self.editions {
            setup.catalog().insert_mock_edition(&slug, &era_slug).await?;
        }

        // 3. Write data files
        for (file_name, contents) in self.data_files {
            setup.write_data_file(&file_name, &contents)?;
        }

        Ok(setup)
    }
}

fn seed_table<E: EntityTrait>(schema: &Schema, entity: E) -> (&'static str, TableCreateStatement) {
    (entity.table_name(), schema.create_table_from_entity(entity))
}

fn connection_endpoints_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_connection_endpoints")
        .table(entity::prelude::Connection)
        .col(entity::connection::Column::SourceType)
        .col(entity::connection::Column::SourceId)
        .col(entity::connection::Column::TargetType)
        .col(entity::connection::Column::TargetId)
        .col(entity::connection::Column::ConnectionType)
        .unique()
        .to_owned()
}

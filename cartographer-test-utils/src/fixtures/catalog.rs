//! Catalog database insertion utilities.
//!
//! Parent rows are created automatically where a child needs one, and an existing row with
//! the same slug is returned instead of inserting a duplicate.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, fixtures::CatalogFixtures};

impl<'a> CatalogFixtures<'a> {
    /// Insert a mock era into the database.
    ///
    /// # Returns
    /// - `Ok(era::Model)` - The created or existing era record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_era(&self, slug: &str) -> Result<entity::era::Model, TestError> {
        if let Some(existing_era) = entity::prelude::Era::find()
            .filter(entity::era::Column::Slug.eq(slug))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_era);
        }

        Ok(entity::prelude::Era::insert(entity::era::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            name: ActiveValue::Set(format!("Era {}", slug)),
            number: ActiveValue::Set(1),
            year_start: ActiveValue::Set(1961),
            year_end: ActiveValue::Set(1970),
            subtitle: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            color: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock creator into the database.
    pub async fn insert_mock_creator(
        &self,
        slug: &str,
    ) -> Result<entity::creator::Model, TestError> {
        if let Some(existing_creator) = entity::prelude::Creator::find()
            .filter(entity::creator::Column::Slug.eq(slug))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_creator);
        }

        Ok(entity::prelude::Creator::insert(entity::creator::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            name: ActiveValue::Set(format!("Creator {}", slug)),
            roles: ActiveValue::Set(serde_json::json!(["writer"])),
            active_years: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock collected edition into the database.
    ///
    /// The era is created automatically if it doesn't exist.
    ///
    /// # Arguments
    /// - `slug` - Slug of the edition
    /// - `era_slug` - Slug of the era the edition belongs to
    pub async fn insert_mock_edition(
        &self,
        slug: &str,
        era_slug: &str,
    ) -> Result<entity::collected_edition::Model, TestError> {
        if let Some(existing_edition) = entity::prelude::CollectedEdition::find()
            .filter(entity::collected_edition::Column::Slug.eq(slug))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_edition);
        }

        let era = self.insert_mock_era(era_slug).await?;

        Ok(
            entity::prelude::CollectedEdition::insert(entity::collected_edition::ActiveModel {
                slug: ActiveValue::Set(slug.to_string()),
                title: ActiveValue::Set(format!("Edition {}", slug)),
                format: ActiveValue::Set("omnibus".to_string()),
                issues_collected: ActiveValue::Set(None),
                issue_count: ActiveValue::Set(0),
                print_status: ActiveValue::Set("in_print".to_string()),
                importance: ActiveValue::Set("recommended".to_string()),
                era_id: ActiveValue::Set(era.id),
                synopsis: ActiveValue::Set(None),
                connection_notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

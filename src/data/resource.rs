use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, TryInsertResult,
};

use crate::model::resource::ResourceRecord;

/// Writes resources.
pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a resource unless one with the same name already exists
    pub async fn upsert(&self, resource: &ResourceRecord) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let result = entity::prelude::Resource::insert(entity::resource::ActiveModel {
            name: ActiveValue::Set(resource.name.clone()),
            resource_type: ActiveValue::Set(resource.resource_type.clone()),
            url: ActiveValue::Set(resource.url.clone()),
            description: ActiveValue::Set(resource.description.clone()),
            focus: ActiveValue::Set(resource.focus.clone()),
            best_for: ActiveValue::Set(resource.best_for.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::resource::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(matches!(result, TryInsertResult::Inserted(_)))
    }
}

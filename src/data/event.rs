use chrono::Utc;
use sea_orm::{
    prelude::Json, sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    TryInsertResult,
};

use crate::model::event::EventRecord;

/// Writes events.
pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert an event unless one with the same slug already exists
    pub async fn upsert(&self, event: &EventRecord, era_id: Option<i32>) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let result = entity::prelude::Event::insert(entity::event::ActiveModel {
            slug: ActiveValue::Set(event.slug.clone()),
            name: ActiveValue::Set(event.name.clone()),
            year: ActiveValue::Set(event.year),
            core_issues: ActiveValue::Set(event.core_issues.clone()),
            importance: ActiveValue::Set(event.importance.clone()),
            synopsis: ActiveValue::Set(event.synopsis.clone()),
            impact: ActiveValue::Set(event.impact.clone()),
            prerequisites: ActiveValue::Set(event.prerequisites.clone()),
            consequences: ActiveValue::Set(event.consequences.clone()),
            era_id: ActiveValue::Set(era_id),
            tags: ActiveValue::Set(Json::from(event.tags.clone())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::event::Column::Slug)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(matches!(result, TryInsertResult::Inserted(_)))
    }
}

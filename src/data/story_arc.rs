use chrono::Utc;
use sea_orm::{
    prelude::Json, sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    TryInsertResult,
};

use crate::model::story_arc::StoryArcRecord;

/// Writes story arcs.
pub struct StoryArcRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StoryArcRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a story arc unless one with the same slug already exists
    ///
    /// `era_id` is `None` when the arc names no era or its era could not be resolved.
    pub async fn upsert(&self, arc: &StoryArcRecord, era_id: Option<i32>) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let result = entity::prelude::StoryArc::insert(entity::story_arc::ActiveModel {
            slug: ActiveValue::Set(arc.slug.clone()),
            name: ActiveValue::Set(arc.name.clone()),
            issues: ActiveValue::Set(arc.issues.clone()),
            era_id: ActiveValue::Set(era_id),
            importance: ActiveValue::Set(arc.importance.clone()),
            synopsis: ActiveValue::Set(arc.synopsis.clone()),
            tags: ActiveValue::Set(Json::from(arc.tags.clone())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::story_arc::Column::Slug)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(matches!(result, TryInsertResult::Inserted(_)))
    }
}

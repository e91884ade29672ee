use chrono::Utc;
use sea_orm::{
    prelude::Json, sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    TryInsertResult,
};

use crate::model::conflict::ContinuityConflictRecord;

/// Writes continuity conflicts.
pub struct ContinuityConflictRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContinuityConflictRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a continuity conflict unless one with the same slug already exists
    pub async fn upsert(&self, conflict: &ContinuityConflictRecord) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let result =
            entity::prelude::ContinuityConflict::insert(entity::continuity_conflict::ActiveModel {
                slug: ActiveValue::Set(conflict.slug.clone()),
                title: ActiveValue::Set(conflict.title.clone()),
                description: ActiveValue::Set(conflict.description.clone()),
                official_stance: ActiveValue::Set(conflict.official_stance.clone()),
                fan_interpretation: ActiveValue::Set(conflict.fan_interpretation.clone()),
                editorial_context: ActiveValue::Set(conflict.editorial_context.clone()),
                confidence: ActiveValue::Set(conflict.confidence),
                source_citations: ActiveValue::Set(Json::from(conflict.source_citations.clone())),
                tags: ActiveValue::Set(Json::from(conflict.tags.clone())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::column(entity::continuity_conflict::Column::Slug)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        Ok(matches!(result, TryInsertResult::Inserted(_)))
    }
}

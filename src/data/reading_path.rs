use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, TryInsertResult,
};

use crate::model::reading_path::{ReadingPathEntryRecord, ReadingPathRecord};

/// Writes reading paths and their entries.
pub struct ReadingPathRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReadingPathRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a reading path, or refresh the name of the path already stored under its slug
    ///
    /// Entries are written separately with [`Self::insert_entry`].
    pub async fn upsert(
        &self,
        path: &ReadingPathRecord,
    ) -> Result<entity::reading_path::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::ReadingPath::insert(entity::reading_path::ActiveModel {
            slug: ActiveValue::Set(path.slug.clone()),
            name: ActiveValue::Set(path.name.clone()),
            path_type: ActiveValue::Set(path.path_type.clone()),
            difficulty: ActiveValue::Set(path.difficulty.clone()),
            description: ActiveValue::Set(path.description.clone()),
            estimated_issues: ActiveValue::Set(path.estimated_issues),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::reading_path::Column::Slug)
                .update_columns([
                    entity::reading_path::Column::Name,
                    entity::reading_path::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Insert an entry at its position within a path
    ///
    /// # Returns
    /// - `Ok(true)`: The entry was inserted
    /// - `Ok(false)`: The path already has an entry at this position; nothing was written
    pub async fn insert_entry(
        &self,
        path_id: i32,
        edition_id: i32,
        entry: &ReadingPathEntryRecord,
    ) -> Result<bool, DbErr> {
        let result =
            entity::prelude::ReadingPathEntry::insert(entity::reading_path_entry::ActiveModel {
                path_id: ActiveValue::Set(path_id),
                position: ActiveValue::Set(entry.position),
                edition_id: ActiveValue::Set(edition_id),
                note: ActiveValue::Set(entry.note.clone()),
                is_optional: ActiveValue::Set(entry.is_optional),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::reading_path_entry::Column::PathId,
                    entity::reading_path_entry::Column::Position,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        Ok(matches!(result, TryInsertResult::Inserted(_)))
    }
}

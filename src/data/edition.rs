use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, TryInsertResult,
};

use crate::model::edition::CollectedEditionRecord;

/// Writes collected editions.
pub struct EditionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EditionRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a collected edition, or refresh the title of the edition already stored under its slug
    ///
    /// # Arguments
    /// - `edition`: Decoded edition record
    /// - `era_id`: ID of the era entry the edition's `era_slug` resolved to
    ///
    /// # Notes
    /// - The embedded creator credits are not written here, see [`Self::link_creator`]
    pub async fn upsert(
        &self,
        edition: &CollectedEditionRecord,
        era_id: i32,
    ) -> Result<entity::collected_edition::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::CollectedEdition::insert(entity::collected_edition::ActiveModel {
            slug: ActiveValue::Set(edition.slug.clone()),
            title: ActiveValue::Set(edition.title.clone()),
            format: ActiveValue::Set(edition.format.clone()),
            issues_collected: ActiveValue::Set(edition.issues_collected.clone()),
            issue_count: ActiveValue::Set(edition.issue_count),
            print_status: ActiveValue::Set(edition.print_status.clone()),
            importance: ActiveValue::Set(edition.importance.clone()),
            era_id: ActiveValue::Set(era_id),
            synopsis: ActiveValue::Set(edition.synopsis.clone()),
            connection_notes: ActiveValue::Set(edition.connection_notes.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::collected_edition::Column::Slug)
                .update_columns([
                    entity::collected_edition::Column::Title,
                    entity::collected_edition::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Link a creator to an edition under the given role
    ///
    /// A link that already exists is left as is.
    ///
    /// # Returns
    /// - `Ok(true)`: A new link was inserted
    /// - `Ok(false)`: The link already existed
    pub async fn link_creator(
        &self,
        edition_id: i32,
        creator_id: i32,
        role: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::EditionCreator::insert(entity::edition_creator::ActiveModel {
            edition_id: ActiveValue::Set(edition_id),
            creator_id: ActiveValue::Set(creator_id),
            role: ActiveValue::Set(role.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::edition_creator::Column::EditionId,
                entity::edition_creator::Column::CreatorId,
                entity::edition_creator::Column::Role,
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

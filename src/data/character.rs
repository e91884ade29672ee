use chrono::Utc;
use sea_orm::{
    prelude::Json, sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    TryInsertResult,
};

use crate::model::character::CharacterRecord;

/// Writes characters.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a character unless one with the same slug already exists
    ///
    /// # Returns
    /// - `Ok(true)`: A new row was inserted
    /// - `Ok(false)`: The slug was already present and the row was left untouched
    pub async fn upsert(&self, character: &CharacterRecord) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let result = entity::prelude::Character::insert(entity::character::ActiveModel {
            slug: ActiveValue::Set(character.slug.clone()),
            name: ActiveValue::Set(character.name.clone()),
            aliases: ActiveValue::Set(Json::from(character.aliases.clone())),
            first_appearance_issue: ActiveValue::Set(character.first_appearance_issue.clone()),
            universe: ActiveValue::Set(character.universe().to_string()),
            teams: ActiveValue::Set(Json::from(character.teams.clone())),
            description: ActiveValue::Set(character.description.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::character::Column::Slug)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(matches!(result, TryInsertResult::Inserted(_)))
    }
}

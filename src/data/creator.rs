use chrono::Utc;
use sea_orm::{
    prelude::Json, sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
};

use crate::model::creator::CreatorRecord;

/// Writes creators.
pub struct CreatorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CreatorRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a creator, or refresh the name of the creator already stored under its slug
    pub async fn upsert(&self, creator: &CreatorRecord) -> Result<entity::creator::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Creator::insert(entity::creator::ActiveModel {
            slug: ActiveValue::Set(creator.slug.clone()),
            name: ActiveValue::Set(creator.name.clone()),
            roles: ActiveValue::Set(Json::from(creator.roles.clone())),
            active_years: ActiveValue::Set(creator.active_years.clone()),
            bio: ActiveValue::Set(creator.bio.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::creator::Column::Slug)
                .update_columns([
                    entity::creator::Column::Name,
                    entity::creator::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}

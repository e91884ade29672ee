use chrono::Utc;
use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::era::EraRecord;

/// Writes eras.
pub struct EraRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EraRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert an era, or refresh the name of the era already stored under its slug
    ///
    /// Only `name` and `updated_at` change on conflict; other fields keep their first-seeded values.
    pub async fn upsert(&self, era: &EraRecord) -> Result<entity::era::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Era::insert(entity::era::ActiveModel {
            slug: ActiveValue::Set(era.slug.clone()),
            name: ActiveValue::Set(era.name.clone()),
            number: ActiveValue::Set(era.number),
            year_start: ActiveValue::Set(era.year_start),
            year_end: ActiveValue::Set(era.year_end),
            subtitle: ActiveValue::Set(era.subtitle.clone()),
            description: ActiveValue::Set(era.description.clone()),
            color: ActiveValue::Set(era.color.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::era::Column::Slug)
                .update_columns([entity::era::Column::Name, entity::era::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}

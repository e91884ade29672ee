use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, TryInsertResult,
};

use crate::model::retailer::RetailerRecord;

/// Writes retailers.
pub struct RetailerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RetailerRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a retailer unless one with the same slug already exists
    pub async fn upsert(&self, retailer: &RetailerRecord) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let result = entity::prelude::Retailer::insert(entity::retailer::ActiveModel {
            slug: ActiveValue::Set(retailer.slug.clone()),
            name: ActiveValue::Set(retailer.name.clone()),
            url: ActiveValue::Set(retailer.url.clone()),
            description: ActiveValue::Set(retailer.description.clone()),
            notes: ActiveValue::Set(retailer.notes.clone()),
            is_digital: ActiveValue::Set(retailer.is_digital),
            ships_international: ActiveValue::Set(retailer.ships_international),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::retailer::Column::Slug)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(matches!(result, TryInsertResult::Inserted(_)))
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, TryInsertResult,
};

use crate::model::connection::ConnectionRecord;

/// Writes connections between editions.
pub struct ConnectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConnectionRepository<'a, C> {
    /// Create a repository over `db`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a connection between two resolved endpoints
    ///
    /// Connections are unique on (source, target, connection type); a duplicate is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)`: A new connection was inserted
    /// - `Ok(false)`: An identical connection already existed
    pub async fn insert(
        &self,
        connection: &ConnectionRecord,
        source_id: i32,
        target_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Connection::insert(entity::connection::ActiveModel {
            source_type: ActiveValue::Set(connection.source_type.clone()),
            source_id: ActiveValue::Set(source_id),
            target_type: ActiveValue::Set(connection.target_type.clone()),
            target_id: ActiveValue::Set(target_id),
            connection_type: ActiveValue::Set(connection.connection_type.clone()),
            strength: ActiveValue::Set(connection.strength()),
            confidence: ActiveValue::Set(connection.confidence()),
            interpretation: ActiveValue::Set(connection.interpretation().to_string()),
            description: ActiveValue::Set(connection.description.clone()),
            citation: ActiveValue::Set(connection.citation.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::connection::Column::SourceType,
                entity::connection::Column::SourceId,
                entity::connection::Column::TargetType,
                entity::connection::Column::TargetId,
                entity::connection::Column::ConnectionType,
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

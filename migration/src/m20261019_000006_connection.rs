use sea_orm_migration::{prelude::*, schema::*};

static IDX_CONNECTION_ENDPOINTS: &str = "idx_connection_endpoints";
static IDX_CONNECTION_TARGET: &str = "idx_connection_target";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Connection::Table)
                    .if_not_exists()
                    .col(pk_auto(Connection::Id))
                    .col(string(Connection::SourceType))
                    .col(integer(Connection::SourceId))
                    .col(string(Connection::TargetType))
                    .col(integer(Connection::TargetId))
                    .col(string(Connection::ConnectionType))
                    .col(integer(Connection::Strength))
                    .col(integer(Connection::Confidence))
                    .col(string(Connection::Interpretation))
                    .col(text_null(Connection::Description))
                    .col(string_null(Connection::Citation))
                    .col(timestamp(Connection::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Conflict target for duplicate links
        manager
            .create_index(
                Index::create()
                    .name(IDX_CONNECTION_ENDPOINTS)
                    .table(Connection::Table)
                    .col(Connection::SourceType)
                    .col(Connection::SourceId)
                    .col(Connection::TargetType)
                    .col(Connection::TargetId)
                    .col(Connection::ConnectionType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONNECTION_TARGET)
                    .table(Connection::Table)
                    .col(Connection::TargetType)
                    .col(Connection::TargetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONNECTION_TARGET)
                    .table(Connection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONNECTION_ENDPOINTS)
                    .table(Connection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Connection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Connection {
    #[sea_orm(iden = "connections")]
    Table,
    Id,
    SourceType,
    SourceId,
    TargetType,
    TargetId,
    ConnectionType,
    Strength,
    Confidence,
    Interpretation,
    Description,
    Citation,
    CreatedAt,
}

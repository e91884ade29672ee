use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_era::Era;

static IDX_EVENT_ERA_ID: &str = "idx_event_era_id";
static FK_EVENT_ERA_ID: &str = "fk_event_era_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string_uniq(Event::Slug))
                    .col(string(Event::Name))
                    .col(integer(Event::Year))
                    .col(string_null(Event::CoreIssues))
                    .col(string(Event::Importance))
                    .col(text_null(Event::Synopsis))
                    .col(text_null(Event::Impact))
                    .col(text_null(Event::Prerequisites))
                    .col(text_null(Event::Consequences))
                    .col(integer_null(Event::EraId))
                    .col(json_binary(Event::Tags))
                    .col(timestamp(Event::CreatedAt))
                    .col(timestamp(Event::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_ERA_ID)
                    .table(Event::Table)
                    .col(Event::EraId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_ERA_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::EraId)
                    .to_tbl(Era::Table)
                    .to_col(Era::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_ERA_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_ERA_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Slug,
    Name,
    Year,
    CoreIssues,
    Importance,
    Synopsis,
    Impact,
    Prerequisites,
    Consequences,
    EraId,
    Tags,
    CreatedAt,
    UpdatedAt,
}

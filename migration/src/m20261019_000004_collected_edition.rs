use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_era::Era;

static IDX_COLLECTED_EDITION_ERA_ID: &str = "idx_collected_edition_era_id";
static FK_COLLECTED_EDITION_ERA_ID: &str = "fk_collected_edition_era_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectedEdition::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectedEdition::Id))
                    .col(string_uniq(CollectedEdition::Slug))
                    .col(string(CollectedEdition::Title))
                    .col(string(CollectedEdition::Format))
                    .col(string_null(CollectedEdition::IssuesCollected))
                    .col(integer(CollectedEdition::IssueCount))
                    .col(string(CollectedEdition::PrintStatus))
                    .col(string(CollectedEdition::Importance))
                    .col(integer(CollectedEdition::EraId))
                    .col(text_null(CollectedEdition::Synopsis))
                    .col(text_null(CollectedEdition::ConnectionNotes))
                    .col(timestamp(CollectedEdition::CreatedAt))
                    .col(timestamp(CollectedEdition::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLECTED_EDITION_ERA_ID)
                    .table(CollectedEdition::Table)
                    .col(CollectedEdition::EraId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COLLECTED_EDITION_ERA_ID)
                    .from_tbl(CollectedEdition::Table)
                    .from_col(CollectedEdition::EraId)
                    .to_tbl(Era::Table)
                    .to_col(Era::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COLLECTED_EDITION_ERA_ID)
                    .table(CollectedEdition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COLLECTED_EDITION_ERA_ID)
                    .table(CollectedEdition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CollectedEdition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CollectedEdition {
    #[sea_orm(iden = "collected_editions")]
    Table,
    Id,
    Slug,
    Title,
    Format,
    IssuesCollected,
    IssueCount,
    PrintStatus,
    Importance,
    EraId,
    Synopsis,
    ConnectionNotes,
    CreatedAt,
    UpdatedAt,
}

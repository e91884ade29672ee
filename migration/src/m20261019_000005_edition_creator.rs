use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000002_creator::Creator, m20261019_000004_collected_edition::CollectedEdition,
};

static IDX_EDITION_CREATOR_CREATOR_ID: &str = "idx_edition_creator_creator_id";
static FK_EDITION_CREATOR_EDITION_ID: &str = "fk_edition_creator_edition_id";
static FK_EDITION_CREATOR_CREATOR_ID: &str = "fk_edition_creator_creator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EditionCreator::Table)
                    .if_not_exists()
                    .col(integer(EditionCreator::EditionId))
                    .col(integer(EditionCreator::CreatorId))
                    .col(string(EditionCreator::Role))
                    .col(timestamp(EditionCreator::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(EditionCreator::EditionId)
                            .col(EditionCreator::CreatorId)
                            .col(EditionCreator::Role),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EDITION_CREATOR_CREATOR_ID)
                    .table(EditionCreator::Table)
                    .col(EditionCreator::CreatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EDITION_CREATOR_EDITION_ID)
                    .from_tbl(EditionCreator::Table)
                    .from_col(EditionCreator::EditionId)
                    .to_tbl(CollectedEdition::Table)
                    .to_col(CollectedEdition::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EDITION_CREATOR_CREATOR_ID)
                    .from_tbl(EditionCreator::Table)
                    .from_col(EditionCreator::CreatorId)
                    .to_tbl(Creator::Table)
                    .to_col(Creator::Id)
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
                    .name(FK_EDITION_CREATOR_CREATOR_ID)
                    .table(EditionCreator::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EDITION_CREATOR_EDITION_ID)
                    .table(EditionCreator::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EDITION_CREATOR_CREATOR_ID)
                    .table(EditionCreator::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EditionCreator::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EditionCreator {
    #[sea_orm(iden = "edition_creators")]
    Table,
    EditionId,
    CreatorId,
    Role,
    CreatedAt,
}

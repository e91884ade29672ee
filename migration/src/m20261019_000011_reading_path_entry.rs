use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000004_collected_edition::CollectedEdition,
    m20261019_000010_reading_path::ReadingPath,
};

static IDX_READING_PATH_ENTRY_EDITION_ID: &str = "idx_reading_path_entry_edition_id";
static FK_READING_PATH_ENTRY_PATH_ID: &str = "fk_reading_path_entry_path_id";
static FK_READING_PATH_ENTRY_EDITION_ID: &str = "fk_reading_path_entry_edition_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReadingPathEntry::Table)
                    .if_not_exists()
                    .col(integer(ReadingPathEntry::PathId))
                    .col(integer(ReadingPathEntry::Position))
                    .col(integer(ReadingPathEntry::EditionId))
                    .col(text_null(ReadingPathEntry::Note))
                    .col(boolean(ReadingPathEntry::IsOptional))
                    .col(timestamp(ReadingPathEntry::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(ReadingPathEntry::PathId)
                            .col(ReadingPathEntry::Position),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_READING_PATH_ENTRY_EDITION_ID)
                    .table(ReadingPathEntry::Table)
                    .col(ReadingPathEntry::EditionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_READING_PATH_ENTRY_PATH_ID)
                    .from_tbl(ReadingPathEntry::Table)
                    .from_col(ReadingPathEntry::PathId)
                    .to_tbl(ReadingPath::Table)
                    .to_col(ReadingPath::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_READING_PATH_ENTRY_EDITION_ID)
                    .from_tbl(ReadingPathEntry::Table)
                    .from_col(ReadingPathEntry::EditionId)
                    .to_tbl(CollectedEdition::Table)
                    .to_col(CollectedEdition::Id)
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
                    .name(FK_READING_PATH_ENTRY_EDITION_ID)
                    .table(ReadingPathEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_READING_PATH_ENTRY_PATH_ID)
                    .table(ReadingPathEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_READING_PATH_ENTRY_EDITION_ID)
                    .table(ReadingPathEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReadingPathEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ReadingPathEntry {
    #[sea_orm(iden = "reading_path_entries")]
    Table,
    PathId,
    Position,
    EditionId,
    Note,
    IsOptional,
    CreatedAt,
}

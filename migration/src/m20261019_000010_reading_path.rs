use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReadingPath::Table)
                    .if_not_exists()
                    .col(pk_auto(ReadingPath::Id))
                    .col(string_uniq(ReadingPath::Slug))
                    .col(string(ReadingPath::Name))
                    .col(string(ReadingPath::PathType))
                    .col(string(ReadingPath::Difficulty))
                    .col(text_null(ReadingPath::Description))
                    .col(integer(ReadingPath::EstimatedIssues))
                    .col(timestamp(ReadingPath::CreatedAt))
                    .col(timestamp(ReadingPath::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReadingPath::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReadingPath {
    #[sea_orm(iden = "reading_paths")]
    Table,
    Id,
    Slug,
    Name,
    PathType,
    Difficulty,
    Description,
    EstimatedIssues,
    CreatedAt,
    UpdatedAt,
}

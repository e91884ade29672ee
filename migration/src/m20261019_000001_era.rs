use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Era::Table)
                    .if_not_exists()
                    .col(pk_auto(Era::Id))
                    .col(string_uniq(Era::Slug))
                    .col(string(Era::Name))
                    .col(integer(Era::Number))
                    .col(integer(Era::YearStart))
                    .col(integer(Era::YearEnd))
                    .col(string_null(Era::Subtitle))
                    .col(text_null(Era::Description))
                    .col(string_null(Era::Color))
                    .col(timestamp(Era::CreatedAt))
                    .col(timestamp(Era::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Era::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Era {
    #[sea_orm(iden = "eras")]
    Table,
    Id,
    Slug,
    Name,
    Number,
    YearStart,
    YearEnd,
    Subtitle,
    Description,
    Color,
    CreatedAt,
    UpdatedAt,
}

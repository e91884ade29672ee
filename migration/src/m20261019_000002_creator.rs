use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Creator::Table)
                    .if_not_exists()
                    .col(pk_auto(Creator::Id))
                    .col(string_uniq(Creator::Slug))
                    .col(string(Creator::Name))
                    .col(json_binary(Creator::Roles))
                    .col(string_null(Creator::ActiveYears))
                    .col(text_null(Creator::Bio))
                    .col(timestamp(Creator::CreatedAt))
                    .col(timestamp(Creator::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Creator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Creator {
    #[sea_orm(iden = "creators")]
    Table,
    Id,
    Slug,
    Name,
    Roles,
    ActiveYears,
    Bio,
    CreatedAt,
    UpdatedAt,
}

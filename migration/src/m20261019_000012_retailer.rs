use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Retailer::Table)
                    .if_not_exists()
                    .col(pk_auto(Retailer::Id))
                    .col(string_uniq(Retailer::Slug))
                    .col(string(Retailer::Name))
                    .col(string_null(Retailer::Url))
                    .col(text_null(Retailer::Description))
                    .col(text_null(Retailer::Notes))
                    .col(boolean(Retailer::IsDigital))
                    .col(boolean(Retailer::ShipsInternational))
                    .col(timestamp(Retailer::CreatedAt))
                    .col(timestamp(Retailer::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Retailer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Retailer {
    #[sea_orm(iden = "retailers")]
    Table,
    Id,
    Slug,
    Name,
    Url,
    Description,
    Notes,
    IsDigital,
    ShipsInternational,
    CreatedAt,
    UpdatedAt,
}

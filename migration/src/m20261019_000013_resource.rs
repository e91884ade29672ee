use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_auto(Resource::Id))
                    .col(string_uniq(Resource::Name))
                    .col(string(Resource::ResourceType))
                    .col(string_null(Resource::Url))
                    .col(text_null(Resource::Description))
                    .col(string_null(Resource::Focus))
                    .col(string_null(Resource::BestFor))
                    .col(timestamp(Resource::CreatedAt))
                    .col(timestamp(Resource::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    #[sea_orm(iden = "resources")]
    Table,
    Id,
    Name,
    ResourceType,
    Url,
    Description,
    Focus,
    BestFor,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_uniq(Character::Slug))
                    .col(string(Character::Name))
                    .col(json_binary(Character::Aliases))
                    .col(string_null(Character::FirstAppearanceIssue))
                    .col(string(Character::Universe))
                    .col(json_binary(Character::Teams))
                    .col(text_null(Character::Description))
                    .col(timestamp(Character::CreatedAt))
                    .col(timestamp(Character::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    #[sea_orm(iden = "characters")]
    Table,
    Id,
    Slug,
    Name,
    Aliases,
    FirstAppearanceIssue,
    Universe,
    Teams,
    Description,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContinuityConflict::Table)
                    .if_not_exists()
                    .col(pk_auto(ContinuityConflict::Id))
                    .col(string_uniq(ContinuityConflict::Slug))
                    .col(string(ContinuityConflict::Title))
                    .col(text_null(ContinuityConflict::Description))
                    .col(text_null(ContinuityConflict::OfficialStance))
                    .col(text_null(ContinuityConflict::FanInterpretation))
                    .col(text_null(ContinuityConflict::EditorialContext))
                    .col(integer(ContinuityConflict::Confidence))
                    .col(json_binary(ContinuityConflict::SourceCitations))
                    .col(json_binary(ContinuityConflict::Tags))
                    .col(timestamp(ContinuityConflict::CreatedAt))
                    .col(timestamp(ContinuityConflict::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContinuityConflict::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContinuityConflict {
    #[sea_orm(iden = "continuity_conflicts")]
    Table,
    Id,
    Slug,
    Title,
    Description,
    OfficialStance,
    FanInterpretation,
    EditorialContext,
    Confidence,
    SourceCitations,
    Tags,
    CreatedAt,
    UpdatedAt,
}

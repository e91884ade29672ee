use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_era::Era;

static IDX_STORY_ARC_ERA_ID: &str = "idx_story_arc_era_id";
static FK_STORY_ARC_ERA_ID: &str = "fk_story_arc_era_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoryArc::Table)
                    .if_not_exists()
                    .col(pk_auto(StoryArc::Id))
                    .col(string_uniq(StoryArc::Slug))
                    .col(string(StoryArc::Name))
                    .col(string_null(StoryArc::Issues))
                    .col(integer_null(StoryArc::EraId))
                    .col(string(StoryArc::Importance))
                    .col(text_null(StoryArc::Synopsis))
                    .col(json_binary(StoryArc::Tags))
                    .col(timestamp(StoryArc::CreatedAt))
                    .col(timestamp(StoryArc::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STORY_ARC_ERA_ID)
                    .table(StoryArc::Table)
                    .col(StoryArc::EraId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STORY_ARC_ERA_ID)
                    .from_tbl(StoryArc::Table)
                    .from_col(StoryArc::EraId)
                    .to_tbl(Era::Table)
                    .to_col(Era::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STORY_ARC_ERA_ID)
                    .table(StoryArc::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STORY_ARC_ERA_ID)
                    .table(StoryArc::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StoryArc::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StoryArc {
    #[sea_orm(iden = "story_arcs")]
    Table,
    Id,
    Slug,
    Name,
    Issues,
    EraId,
    Importance,
    Synopsis,
    Tags,
    CreatedAt,
    UpdatedAt,
}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reading_path_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub path_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i32,
    pub edition_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub is_optional: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reading_path::Entity",
        from = "Column::PathId",
        to = "super::reading_path::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ReadingPath,
    #[sea_orm(
        belongs_to = "super::collected_edition::Entity",
        from = "Column::EditionId",
        to = "super::collected_edition::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CollectedEdition,
}

impl Related<super::reading_path::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReadingPath.def()
    }
}

impl Related<super::collected_edition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectedEdition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collected_editions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub format: String,
    pub issues_collected: Option<String>,
    pub issue_count: i32,
    pub print_status: String,
    pub importance: String,
    pub era_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub synopsis: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub connection_notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::era::Entity",
        from = "Column::EraId",
        to = "super::era::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Era,
    #[sea_orm(has_many = "super::edition_creator::Entity")]
    EditionCreator,
    #[sea_orm(has_many = "super::reading_path_entry::Entity")]
    ReadingPathEntry,
}

impl Related<super::era::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Era.def()
    }
}

impl Related<super::edition_creator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EditionCreator.def()
    }
}

impl Related<super::reading_path_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReadingPathEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

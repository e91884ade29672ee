use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reading_paths")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub path_type: String,
    pub difficulty: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub estimated_issues: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reading_path_entry::Entity")]
    ReadingPathEntry,
}

impl Related<super::reading_path_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReadingPathEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

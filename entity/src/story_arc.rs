use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "story_arcs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub issues: Option<String>,
    pub era_id: Option<i32>,
    pub importance: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub synopsis: Option<String>,
    pub tags: Json,
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
        on_delete = "SetNull"
    )]
    Era,
}

impl Related<super::era::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Era.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

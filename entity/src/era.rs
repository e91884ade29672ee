use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eras")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub number: i32,
    pub year_start: i32,
    pub year_end: i32,
    pub subtitle: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::collected_edition::Entity")]
    CollectedEdition,
    #[sea_orm(has_many = "super::story_arc::Entity")]
    StoryArc,
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
}

impl Related<super::collected_edition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectedEdition.def()
    }
}

impl Related<super::story_arc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoryArc.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "edition_creators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub edition_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub creator_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub role: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::collected_edition::Entity",
        from = "Column::EditionId",
        to = "super::collected_edition::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CollectedEdition,
    #[sea_orm(
        belongs_to = "super::creator::Entity",
        from = "Column::CreatorId",
        to = "super::creator::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Creator,
}

impl Related<super::collected_edition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectedEdition.def()
    }
}

impl Related<super::creator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

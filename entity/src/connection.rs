use sea_orm::entity::prelude::*;

/// A directed link between two catalog items.
///
/// `source_id`/`target_id` are interpreted through `source_type`/`target_type`,
/// so no foreign key constraint is declared on them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "connections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub source_type: String,
    pub source_id: i32,
    pub target_type: String,
    pub target_id: i32,
    pub connection_type: String,
    pub strength: i32,
    pub confidence: i32,
    pub interpretation: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub citation: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sde_planet_schematic_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub schematic_id: i64,
    pub type_id: i64,
    pub quantity: i64,
    pub is_input: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planetary_pin_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pin_id: i32,
    pub type_id: i64,
    pub amount: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planetary_pin::Entity",
        from = "Column::PinId",
        to = "super::planetary_pin::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PlanetaryPin,
}

impl Related<super::planetary_pin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetaryPin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planetary_colony")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub character_id: i64,
    pub planet_id: i64,
    pub planet_type: String,
    pub solar_system_id: i64,
    pub upgrade_level: i32,
    pub last_update: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planetary_pin::Entity")]
    PlanetaryPin,
    #[sea_orm(has_many = "super::planetary_route::Entity")]
    PlanetaryRoute,
}

impl Related<super::planetary_pin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetaryPin.def()
    }
}

impl Related<super::planetary_route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetaryRoute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

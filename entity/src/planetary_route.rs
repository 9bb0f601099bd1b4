use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planetary_route")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub colony_id: i32,
    pub route_id: i64,
    pub source_pin_id: i64,
    pub destination_pin_id: i64,
    pub content_type_id: i64,
    pub quantity: i64,
    /// Comma separated pin ids the route travels through
    pub waypoints: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planetary_colony::Entity",
        from = "Column::ColonyId",
        to = "super::planetary_colony::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PlanetaryColony,
}

impl Related<super::planetary_colony::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetaryColony.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

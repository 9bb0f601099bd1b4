use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planetary_pin")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub colony_id: i32,
    pub pin_id: i64,
    pub type_id: i64,
    pub product_type_id: Option<i64>,
    pub cycle_time: Option<i64>,
    pub qty_per_cycle: Option<i64>,
    pub num_heads: Option<i32>,
    pub install_time: Option<DateTime>,
    pub expiry_time: Option<DateTime>,
    pub last_cycle_start: Option<DateTime>,
    pub schematic_id: Option<i64>,
    pub capacity: Option<f64>,
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
    #[sea_orm(has_many = "super::planetary_pin_content::Entity")]
    PlanetaryPinContent,
}

impl Related<super::planetary_colony::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetaryColony.def()
    }
}

impl Related<super::planetary_pin_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetaryPinContent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

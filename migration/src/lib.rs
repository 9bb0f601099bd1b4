pub use sea_orm_migration::prelude::*;

mod m20251104_000001_planetary_colony;
mod m20251104_000002_planetary_pin;
mod m20251104_000003_planetary_pin_content;
mod m20251104_000004_planetary_route;
mod m20251104_000005_sde_planet_schematic;
mod m20251104_000006_sde_market_group;
mod m20251104_000007_sde_type;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251104_000001_planetary_colony::Migration),
            Box::new(m20251104_000002_planetary_pin::Migration),
            Box::new(m20251104_000003_planetary_pin_content::Migration),
            Box::new(m20251104_000004_planetary_route::Migration),
            Box::new(m20251104_000005_sde_planet_schematic::Migration),
            Box::new(m20251104_000006_sde_market_group::Migration),
            Box::new(m20251104_000007_sde_type::Migration),
        ]
    }
}

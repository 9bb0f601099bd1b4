//! SeaORM entities for planetary colonies and the static data they reference.

pub mod prelude;

pub mod planetary_colony;
pub mod planetary_pin;
pub mod planetary_pin_content;
pub mod planetary_route;
pub mod sde_market_group;
pub mod sde_planet_schematic;
pub mod sde_planet_schematic_type;
pub mod sde_type;

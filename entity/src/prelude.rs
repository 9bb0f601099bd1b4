pub use super::planetary_colony::Entity as PlanetaryColony;
pub use super::planetary_pin::Entity as PlanetaryPin;
pub use super::planetary_pin_content::Entity as PlanetaryPinContent;
pub use super::planetary_route::Entity as PlanetaryRoute;
pub use super::sde_market_group::Entity as SdeMarketGroup;
pub use super::sde_planet_schematic::Entity as SdePlanetSchematic;
pub use super::sde_planet_schematic_type::Entity as SdePlanetSchematicType;
pub use super::sde_type::Entity as SdeType;

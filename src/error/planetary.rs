use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanetaryError {
    // Indicates the upstream colony sync wrote inconsistent rows, the colony should be re-synced
    // rather than partially analyzed.
    #[error("Colony {colony_id} failed data integrity check: {detail}")]
    DataIntegrity { colony_id: i64, detail: String },
    #[error("Pin {pin_id} does not belong to colony {colony_id}")]
    PinNotFound { colony_id: i64, pin_id: i64 },
    #[error("Character {character_id} has no colony on planet {planet_id}")]
    ColonyNotFound { character_id: i64, planet_id: i64 },
}

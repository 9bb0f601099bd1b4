//! Planetary colony, pin and route models.
//!
//! Colonies are populated by an external sync process and are read-only to the calculators.
//! Pins arrive as a bag of optional fields ([`PinFields`]) and are classified exactly once into
//! a [`PinKind`] when the [`Pin`] is built, so every consumer sees the same classification.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::planetary::PlanetaryError;

/// Command center type IDs, one per planet type.
const COMMAND_CENTER_TYPE_IDS: [i64; 8] = [2254, 2524, 2525, 2533, 2534, 2549, 2550, 2551];
/// Launchpad type IDs, one per planet type.
const LAUNCHPAD_TYPE_IDS: [i64; 8] = [2256, 2542, 2543, 2544, 2552, 2555, 2556, 2557];
/// Storage facility type IDs, one per planet type.
const STORAGE_FACILITY_TYPE_IDS: [i64; 8] = [2257, 2535, 2536, 2541, 2558, 2560, 2561, 2562];

/// A single planetary colony owned by a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colony {
    /// Identifier of the colony record
    pub id: i64,
    /// EVE Online character ID owning the colony
    pub character_id: i64,
    pub planet_id: i64,
    /// Planet type, e.g. `barren` or `temperate`
    pub planet_type: String,
    pub solar_system_id: i64,
    /// Command center upgrade level (0-5)
    pub upgrade_level: i32,
    /// Last time the colony was synced from ESI
    pub last_update: Option<DateTime<Utc>>,
    pub pins: Vec<Pin>,
    pub routes: Vec<Route>,
}

impl Colony {
    /// Finds a pin of this colony by its pin ID.
    pub fn pin(&self, pin_id: i64) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.pin_id == pin_id)
    }

    /// Iterates over the colony's extractor pins.
    pub fn extractors(&self) -> impl Iterator<Item = (&Pin, &Extractor)> {
        self.pins
            .iter()
            .filter_map(|pin| pin.extractor().map(|extractor| (pin, extractor)))
    }

    /// Iterates over the colony's factory pins.
    pub fn factories(&self) -> impl Iterator<Item = (&Pin, &Factory)> {
        self.pins
            .iter()
            .filter_map(|pin| pin.factory().map(|factory| (pin, factory)))
    }

    /// Checks the structural invariants of the colony.
    ///
    /// Pin IDs must be unique within the colony and every route must start and end at a pin
    /// of this colony. Routes looping back onto their source pin are accepted.
    ///
    /// # Returns
    /// - `Ok(())` - Colony is structurally sound
    /// - `Err(PlanetaryError::DataIntegrity)` - Duplicate pin or route endpoint outside the colony
    pub fn validate(&self) -> Result<(), PlanetaryError> {
        let mut pin_ids = HashSet::with_capacity(self.pins.len());
        for pin in &self.pins {
            if !pin_ids.insert(pin.pin_id) {
                return Err(PlanetaryError::DataIntegrity {
                    colony_id: self.id,
                    detail: format!("pin {} appears more than once", pin.pin_id),
                });
            }
        }

        for route in &self.routes {
            for pin_id in [route.source_pin_id, route.destination_pin_id] {
                if !pin_ids.contains(&pin_id) {
                    return Err(PlanetaryError::DataIntegrity {
                        colony_id: self.id,
                        detail: format!(
                            "route {} references pin {} which is not part of the colony",
                            route.route_id, pin_id
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Raw pin fields as delivered by the colony sync, before classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinFields {
    pub type_id: i64,
    pub product_type_id: Option<i64>,
    pub cycle_time_seconds: Option<i64>,
    pub qty_per_cycle: Option<i64>,
    pub num_heads: Option<i32>,
    pub expiry_time: Option<DateTime<Utc>>,
    pub schematic_id: Option<i64>,
    pub capacity: Option<f64>,
    pub contents: Vec<PinContent>,
}

/// A planetary facility placed on a colony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub pin_id: i64,
    pub type_id: i64,
    pub kind: PinKind,
    /// Current stock held by the pin
    pub contents: Vec<PinContent>,
}

/// What a pin does, resolved once from its raw fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PinKind {
    Extractor(Extractor),
    Factory(Factory),
    Storage(Storage),
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extractor {
    pub product_type_id: i64,
    pub cycle_time_seconds: Option<i64>,
    pub qty_per_cycle: i64,
    pub num_heads: Option<i32>,
    /// `None` means the extraction program never expires
    pub expiry_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    pub schematic_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    /// Capacity in cubic meters
    pub capacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinContent {
    pub type_id: i64,
    pub amount: i64,
}

/// Display category of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinCategory {
    Extractor,
    Factory,
    CommandCenter,
    Launchpad,
    StorageFacility,
    Other,
}

impl Pin {
    /// Classifies raw pin fields into a pin.
    ///
    /// An extractor product type always wins, even if the sync also reported a schematic for
    /// the pin. A schematic without a product type makes a factory, a capacity without either
    /// makes a storage pin, and anything else is [`PinKind::Other`].
    pub fn from_fields(pin_id: i64, fields: PinFields) -> Self {
        let kind = if let Some(product_type_id) = fields.product_type_id {
            PinKind::Extractor(Extractor {
                product_type_id,
                cycle_time_seconds: fields.cycle_time_seconds,
                qty_per_cycle: fields.qty_per_cycle.unwrap_or(0),
                num_heads: fields.num_heads,
                expiry_time: fields.expiry_time,
            })
        } else if let Some(schematic_id) = fields.schematic_id {
            PinKind::Factory(Factory { schematic_id })
        } else if let Some(capacity) = fields.capacity {
            PinKind::Storage(Storage { capacity })
        } else {
            PinKind::Other
        };

        Self {
            pin_id,
            type_id: fields.type_id,
            kind,
            contents: fields.contents,
        }
    }

    pub fn extractor(&self) -> Option<&Extractor> {
        match &self.kind {
            PinKind::Extractor(extractor) => Some(extractor),
            _ => None,
        }
    }

    pub fn factory(&self) -> Option<&Factory> {
        match &self.kind {
            PinKind::Factory(factory) => Some(factory),
            _ => None,
        }
    }

    pub fn is_extractor(&self) -> bool {
        matches!(self.kind, PinKind::Extractor(_))
    }

    pub fn is_factory(&self) -> bool {
        matches!(self.kind, PinKind::Factory(_))
    }

    /// Storage capacity in cubic meters, only known for storage-class pins.
    pub fn capacity(&self) -> Option<f64> {
        match self.kind {
            PinKind::Storage(storage) => Some(storage.capacity),
            _ => None,
        }
    }

    /// Display category, derived from the pin kind and, for storage-class pins, the type ID.
    pub fn category(&self) -> PinCategory {
        match self.kind {
            PinKind::Extractor(_) => PinCategory::Extractor,
            PinKind::Factory(_) => PinCategory::Factory,
            PinKind::Storage(_) | PinKind::Other => {
                if COMMAND_CENTER_TYPE_IDS.contains(&self.type_id) {
                    PinCategory::CommandCenter
                } else if LAUNCHPAD_TYPE_IDS.contains(&self.type_id) {
                    PinCategory::Launchpad
                } else if STORAGE_FACILITY_TYPE_IDS.contains(&self.type_id) {
                    PinCategory::StorageFacility
                } else {
                    PinCategory::Other
                }
            }
        }
    }
}

/// A directed material transfer between two pins of the same colony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: i64,
    pub source_pin_id: i64,
    pub destination_pin_id: i64,
    pub content_type_id: i64,
    /// Units moved every production cycle
    pub quantity_per_cycle: i64,
    pub waypoints: Vec<i64>,
}

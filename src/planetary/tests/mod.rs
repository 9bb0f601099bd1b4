//! Tests for the planetary calculations.
//!
//! Shared fixtures build a small static data catalog mirroring the real planetary commodity
//! market tree (1332 Planetary Materials with the tier roots 1334-1337 below it) and helpers to
//! assemble colonies from pins and routes.


use std::{
    collections::{BTreeSet, HashMap},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    error::Error,
    model::{
        colony::{Colony, Pin, PinContent, PinFields, Route},
        schematic::{Schematic, SchematicMaterial},
    },
    planetary::catalog::{PriceOracle, SdeCatalog, StaticPriceOracle},
};

pub(super) const PLANETARY_MATERIALS_GROUP_ID: i64 = 1332;
pub(super) const RAW_MATERIALS_GROUP_ID: i64 = 1333;
pub(super) const NESTED_P2_GROUP_ID: i64 = 20001;

pub(super) const AQUEOUS_LIQUIDS: i64 = 2268;
pub(super) const BASE_METALS: i64 = 2267;
pub(super) const WATER: i64 = 3645;
pub(super) const BACTERIA: i64 = 2393;
pub(super) const COOLANT: i64 = 9832;
pub(super) const NESTED_COOLANT: i64 = 9833;
pub(super) const ROBOTICS: i64 = 9848;
pub(super) const BROADCAST_NODE: i64 = 2867;

pub(super) const WATER_SCHEMATIC_ID: i64 = 121;
pub(super) const COOLANT_SCHEMATIC_ID: i64 = 65;

/// Fixed reference time for expiry calculations.
pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 4, 12, 0, 0).unwrap()
}

pub(super) fn catalog() -> SdeCatalog {
    SdeCatalog::new()
        .with_market_group(PLANETARY_MATERIALS_GROUP_ID, None)
        .with_market_group(RAW_MATERIALS_GROUP_ID, Some(PLANETARY_MATERIALS_GROUP_ID))
        .with_market_group(1334, Some(PLANETARY_MATERIALS_GROUP_ID))
        .with_market_group(1335, Some(PLANETARY_MATERIALS_GROUP_ID))
        .with_market_group(1336, Some(PLANETARY_MATERIALS_GROUP_ID))
        .with_market_group(1337, Some(PLANETARY_MATERIALS_GROUP_ID))
        .with_market_group(NESTED_P2_GROUP_ID, Some(1335))
        .with_type(AQUEOUS_LIQUIDS, "Aqueous Liquids", Some(RAW_MATERIALS_GROUP_ID))
        .with_type(BASE_METALS, "Base Metals", None)
        .with_type(WATER, "Water", Some(1334))
        .with_type(BACTERIA, "Bacteria", Some(1334))
        .with_type(COOLANT, "Coolant", Some(1335))
        .with_type(NESTED_COOLANT, "Nested Coolant", Some(NESTED_P2_GROUP_ID))
        .with_type(ROBOTICS, "Robotics", Some(1336))
        .with_type(BROADCAST_NODE, "Broadcast Node", Some(1337))
        .with_schematic(Schematic {
            schematic_id: WATER_SCHEMATIC_ID,
            name: "Water".to_string(),
            cycle_time_seconds: 1800,
            inputs: vec![SchematicMaterial {
                type_id: AQUEOUS_LIQUIDS,
                quantity: 3000,
            }],
            output: SchematicMaterial {
                type_id: WATER,
                quantity: 20,
            },
        })
        .with_schematic(Schematic {
            schematic_id: COOLANT_SCHEMATIC_ID,
            name: "Coolant".to_string(),
            cycle_time_seconds: 3600,
            inputs: vec![
                SchematicMaterial {
                    type_id: WATER,
                    quantity: 40,
                },
                SchematicMaterial {
                    type_id: 9828,
                    quantity: 40,
                },
            ],
            output: SchematicMaterial {
                type_id: COOLANT,
                quantity: 5,
            },
        })
}

pub(super) fn colony(id: i64, pins: Vec<Pin>, routes: Vec<Route>) -> Colony {
    Colony {
        id,
        character_id: 2114794365,
        planet_id: 40000000 + id,
        planet_type: "barren".to_string(),
        solar_system_id: 30000142,
        upgrade_level: 5,
        last_update: Some(now()),
        pins,
        routes,
    }
}

pub(super) fn extractor(
    pin_id: i64,
    product_type_id: i64,
    cycle_time_seconds: Option<i64>,
    qty_per_cycle: i64,
    expiry_time: Option<DateTime<Utc>>,
) -> Pin {
    Pin::from_fields(
        pin_id,
        PinFields {
            type_id: 3060,
            product_type_id: Some(product_type_id),
            cycle_time_seconds,
            qty_per_cycle: Some(qty_per_cycle),
            num_heads: Some(10),
            expiry_time,
            ..Default::default()
        },
    )
}

pub(super) fn factory(pin_id: i64, schematic_id: i64) -> Pin {
    Pin::from_fields(
        pin_id,
        PinFields {
            type_id: 2473,
            schematic_id: Some(schematic_id),
            ..Default::default()
        },
    )
}

pub(super) fn storage(pin_id: i64, capacity: f64, contents: Vec<PinContent>) -> Pin {
    Pin::from_fields(
        pin_id,
        PinFields {
            type_id: 2541,
            capacity: Some(capacity),
            contents,
            ..Default::default()
        },
    )
}

pub(super) fn route(
    route_id: i64,
    source_pin_id: i64,
    destination_pin_id: i64,
    content_type_id: i64,
    quantity_per_cycle: i64,
) -> Route {
    Route {
        route_id,
        source_pin_id,
        destination_pin_id,
        content_type_id,
        quantity_per_cycle,
        waypoints: Vec::new(),
    }
}

/// Price oracle recording every batch it is asked for.
#[derive(Default)]
pub(super) struct RecordingPriceOracle {
    inner: StaticPriceOracle,
    calls: AtomicUsize,
    requests: Mutex<Vec<BTreeSet<i64>>>,
}

impl RecordingPriceOracle {
    pub(super) fn new(prices: &[(i64, f64)]) -> Self {
        Self {
            inner: StaticPriceOracle::new(prices.iter().copied().collect::<HashMap<_, _>>()),
            ..Default::default()
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn requests(&self) -> Vec<BTreeSet<i64>> {
        self.requests.lock().unwrap().clone()
    }
}

impl PriceOracle for RecordingPriceOracle {
    async fn get_prices(
        &self,
        type_ids: &BTreeSet<i64>,
    ) -> Result<HashMap<i64, Option<f64>>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(type_ids.clone());

        self.inner.get_prices(type_ids).await
    }
}

//! Storage pin flow analysis.
//!
//! For one storage-class pin, routes delivering into it and routes drawing from it are grouped
//! by content type. Incoming flows run at the cycle time of their source pin (the producer),
//! outgoing flows at the cycle time of their destination pin (the consumer). Daily quantities
//! are converted to m³ with a per-tier unit volume to estimate net accumulation and the days
//! left until the pin is full.

use std::collections::{BTreeMap, HashMap};

use dioxus_logger::tracing;

use crate::{
    error::{planetary::PlanetaryError, Error},
    model::{
        colony::{Colony, Route},
        flow::{FlowLine, StorageFlowReport},
        tier::Tier,
    },
    planetary::{
        catalog::{MarketTaxonomy, SchematicCatalog},
        cycle::per_day,
        tier::TierClassifier,
    },
};

/// Unit volume used for tiers missing from a [`UnitVolumes`] table.
pub const P1_UNIT_VOLUME: f64 = 0.38;

/// Per-unit volume in m³ of each commodity tier.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitVolumes {
    volumes: BTreeMap<Tier, f64>,
}

impl Default for UnitVolumes {
    fn default() -> Self {
        Self::new([
            (Tier::P0, 0.01),
            (Tier::P1, P1_UNIT_VOLUME),
            (Tier::P2, 1.5),
            (Tier::P3, 6.0),
            (Tier::P4, 100.0),
        ])
    }
}

impl UnitVolumes {
    pub fn new(volumes: impl IntoIterator<Item = (Tier, f64)>) -> Self {
        Self {
            volumes: volumes.into_iter().collect(),
        }
    }

    /// Volume of one unit of the tier, falling back to the P1 volume.
    pub fn volume_of(&self, tier: Tier) -> f64 {
        self.volumes
            .get(&tier)
            .or_else(|| self.volumes.get(&Tier::P1))
            .copied()
            .unwrap_or(P1_UNIT_VOLUME)
    }
}

/// Which end of a route is connected to the analyzed storage pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Incoming,
    Outgoing,
}

/// Running aggregate of the routes of one content type.
struct FlowAccumulator {
    type_id: i64,
    quantity_per_cycle: i64,
    cycle_time_seconds: Option<i64>,
    daily_quantity: Option<f64>,
    route_count: usize,
}

impl FlowAccumulator {
    fn new(type_id: i64) -> Self {
        Self {
            type_id,
            quantity_per_cycle: 0,
            cycle_time_seconds: None,
            daily_quantity: Some(0.0),
            route_count: 0,
        }
    }

    fn add(&mut self, quantity_per_cycle: i64, cycle_time_seconds: Option<i64>) {
        self.quantity_per_cycle = self.quantity_per_cycle.saturating_add(quantity_per_cycle);
        self.route_count += 1;

        if self.cycle_time_seconds.is_none() {
            self.cycle_time_seconds = cycle_time_seconds;
        }

        // One route without a cycle time makes the whole flow unknown
        self.daily_quantity = match (self.daily_quantity, cycle_time_seconds) {
            (Some(total), Some(seconds)) => Some(total + per_day(quantity_per_cycle, seconds)),
            _ => None,
        };
    }
}

pub struct FlowAnalyzer<'a, S: ?Sized, T: ?Sized> {
    schematics: &'a S,
    taxonomy: &'a T,
    volumes: UnitVolumes,
}

impl<'a, S, T> FlowAnalyzer<'a, S, T>
where
    S: SchematicCatalog + ?Sized,
    T: MarketTaxonomy + ?Sized,
{
    /// Creates a new instance of [`FlowAnalyzer`] using the default unit volumes
    pub fn new(schematics: &'a S, taxonomy: &'a T) -> Self {
        Self {
            schematics,
            taxonomy,
            volumes: UnitVolumes::default(),
        }
    }

    pub fn with_volumes(mut self, volumes: UnitVolumes) -> Self {
        self.volumes = volumes;
        self
    }

    /// Analyzes the material flow through a storage pin.
    ///
    /// The net daily volume is only reported when at least one flow exists and every flow on
    /// both sides has a known daily quantity; a single unknown flow invalidates the figure.
    /// Fill days are only reported for a known, positive capacity and a positive net volume.
    ///
    /// # Arguments
    /// - `colony` - Colony owning the storage pin, with pins and routes loaded
    /// - `storage_pin_id` - Pin ID of the storage pin to analyze
    ///
    /// # Returns
    /// - `Ok(StorageFlowReport)` - Incoming/outgoing flows and the capacity forecast
    /// - `Err(Error::PlanetaryError)` - The colony fails its integrity check or the pin is not
    ///   part of the colony
    pub fn analyze(&self, colony: &Colony, storage_pin_id: i64) -> Result<StorageFlowReport, Error> {
        if let Err(err) = colony.validate() {
            tracing::warn!("Refusing storage flow analysis: {}", err);
            return Err(err.into());
        }

        let storage_pin = colony
            .pin(storage_pin_id)
            .ok_or(PlanetaryError::PinNotFound {
                colony_id: colony.id,
                pin_id: storage_pin_id,
            })?;

        let classifier = TierClassifier::new(self.taxonomy);

        let incoming = self.group_flows(colony, storage_pin_id, Direction::Incoming, &classifier);
        let outgoing = self.group_flows(colony, storage_pin_id, Direction::Outgoing, &classifier);

        let net_daily_volume = self.net_daily_volume(&incoming, &outgoing);
        let capacity = storage_pin.capacity();
        let fill_days = match (capacity, net_daily_volume) {
            (Some(capacity), Some(net)) if capacity > 0.0 && net > 0.0 => {
                Some(round_to(capacity / net, 1))
            }
            _ => None,
        };

        let stored_volume = round_to(
            storage_pin
                .contents
                .iter()
                .map(|content| {
                    content.amount as f64 * self.volumes.volume_of(classifier.classify(content.type_id))
                })
                .sum(),
            2,
        );

        tracing::debug!(
            "Storage pin {} of colony {}: {} incoming, {} outgoing flows, net {:?} m3/day",
            storage_pin_id,
            colony.id,
            incoming.len(),
            outgoing.len(),
            net_daily_volume
        );

        Ok(StorageFlowReport {
            pin_id: storage_pin_id,
            incoming,
            outgoing,
            net_daily_volume,
            fill_days,
            capacity,
            stored_volume,
        })
    }

    /// Folds the routes touching the storage pin into one flow line per content type, in
    /// order of first appearance.
    fn group_flows(
        &self,
        colony: &Colony,
        storage_pin_id: i64,
        direction: Direction,
        classifier: &TierClassifier<'_, T>,
    ) -> Vec<FlowLine> {
        let mut index: HashMap<i64, usize> = HashMap::new();
        let mut groups: Vec<FlowAccumulator> = Vec::new();

        for route in &colony.routes {
            let Some(far_pin_id) = far_end(route, storage_pin_id, direction) else {
                continue;
            };

            let cycle_time = colony
                .pin(far_pin_id)
                .and_then(|pin| pin.cycle_time_seconds(self.schematics));

            let position = *index.entry(route.content_type_id).or_insert_with(|| {
                groups.push(FlowAccumulator::new(route.content_type_id));
                groups.len() - 1
            });
            groups[position].add(route.quantity_per_cycle, cycle_time);
        }

        groups
            .into_iter()
            .map(|group| FlowLine {
                type_id: group.type_id,
                tier: classifier.classify(group.type_id),
                quantity_per_cycle: group.quantity_per_cycle,
                cycle_time_seconds: group.cycle_time_seconds,
                daily_quantity: group.daily_quantity,
                route_count: group.route_count,
            })
            .collect()
    }

    fn net_daily_volume(&self, incoming: &[FlowLine], outgoing: &[FlowLine]) -> Option<f64> {
        if incoming.is_empty() && outgoing.is_empty() {
            return None;
        }

        let incoming_volume = self.total_volume(incoming)?;
        let outgoing_volume = self.total_volume(outgoing)?;

        Some(round_to(incoming_volume - outgoing_volume, 2))
    }

    /// Daily volume of a set of flows, `None` if any flow is unknown.
    fn total_volume(&self, flows: &[FlowLine]) -> Option<f64> {
        flows
            .iter()
            .map(|flow| {
                flow.daily_quantity
                    .map(|quantity| quantity * self.volumes.volume_of(flow.tier))
            })
            .sum()
    }
}

/// Pin on the other end of a route that touches the storage pin in the given direction.
fn far_end(route: &Route, storage_pin_id: i64, direction: Direction) -> Option<i64> {
    match direction {
        Direction::Incoming if route.destination_pin_id == storage_pin_id => {
            Some(route.source_pin_id)
        }
        Direction::Outgoing if route.source_pin_id == storage_pin_id => {
            Some(route.destination_pin_id)
        }
        _ => None,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

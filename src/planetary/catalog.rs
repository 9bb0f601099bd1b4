//! Collaborator interfaces consumed by the calculators, with in-memory implementations.
//!
//! [`SdeCatalog`] holds static data extracted from the EVE Online SDE and implements both
//! [`SchematicCatalog`] and [`MarketTaxonomy`]. [`StaticPriceOracle`] answers price lookups
//! from a fixed table.

use std::{
    collections::{BTreeSet, HashMap},
    future::Future,
};

use crate::{error::Error, model::schematic::Schematic};

/// Lookup of factory schematics by schematic ID.
pub trait SchematicCatalog {
    fn schematic(&self, schematic_id: i64) -> Option<&Schematic>;
}

/// Read-only view of the market group forest and the types placed in it.
pub trait MarketTaxonomy {
    /// Market group a type is listed under, if any.
    fn market_group_of(&self, type_id: i64) -> Option<i64>;

    /// Parent of a market group, `None` for a root.
    fn parent_group(&self, group_id: i64) -> Option<i64>;

    /// Display name of a type.
    fn type_name(&self, type_id: i64) -> Option<&str>;
}

/// Batched per-unit price lookup.
///
/// Implementations must answer the whole set in one call; the calculators never request
/// prices type by type. A type missing from the returned map, or mapped to `None`, has an
/// unknown price.
pub trait PriceOracle {
    fn get_prices(
        &self,
        type_ids: &BTreeSet<i64>,
    ) -> impl Future<Output = Result<HashMap<i64, Option<f64>>, Error>> + Send;
}

/// In-memory static data catalog.
#[derive(Debug, Clone, Default)]
pub struct SdeCatalog {
    schematics: HashMap<i64, Schematic>,
    group_parents: HashMap<i64, Option<i64>>,
    type_groups: HashMap<i64, i64>,
    type_names: HashMap<i64, String>,
}

impl SdeCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_schematic(&mut self, schematic: Schematic) {
        self.schematics.insert(schematic.schematic_id, schematic);
    }

    pub fn insert_market_group(&mut self, market_group_id: i64, parent_group_id: Option<i64>) {
        self.group_parents.insert(market_group_id, parent_group_id);
    }

    /// Registers a type name and, when listed on the market, its market group.
    pub fn insert_type(&mut self, type_id: i64, name: &str, market_group_id: Option<i64>) {
        self.type_names.insert(type_id, name.to_string());
        match market_group_id {
            Some(group_id) => self.type_groups.insert(type_id, group_id),
            None => self.type_groups.remove(&type_id),
        };
    }

    pub fn with_schematic(mut self, schematic: Schematic) -> Self {
        self.insert_schematic(schematic);
        self
    }

    pub fn with_market_group(mut self, market_group_id: i64, parent_group_id: Option<i64>) -> Self {
        self.insert_market_group(market_group_id, parent_group_id);
        self
    }

    pub fn with_type(mut self, type_id: i64, name: &str, market_group_id: Option<i64>) -> Self {
        self.insert_type(type_id, name, market_group_id);
        self
    }

    pub fn schematic_count(&self) -> usize {
        self.schematics.len()
    }
}

impl SchematicCatalog for SdeCatalog {
    fn schematic(&self, schematic_id: i64) -> Option<&Schematic> {
        self.schematics.get(&schematic_id)
    }
}

impl MarketTaxonomy for SdeCatalog {
    fn market_group_of(&self, type_id: i64) -> Option<i64> {
        self.type_groups.get(&type_id).copied()
    }

    fn parent_group(&self, group_id: i64) -> Option<i64> {
        self.group_parents.get(&group_id).copied().flatten()
    }

    fn type_name(&self, type_id: i64) -> Option<&str> {
        self.type_names.get(&type_id).map(String::as_str)
    }
}

/// Price oracle answering from a fixed price table.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceOracle {
    prices: HashMap<i64, f64>,
}

impl StaticPriceOracle {
    pub fn new(prices: HashMap<i64, f64>) -> Self {
        Self { prices }
    }

    pub fn with_price(mut self, type_id: i64, price: f64) -> Self {
        self.prices.insert(type_id, price);
        self
    }
}

impl PriceOracle for StaticPriceOracle {
    async fn get_prices(
        &self,
        type_ids: &BTreeSet<i64>,
    ) -> Result<HashMap<i64, Option<f64>>, Error> {
        Ok(type_ids
            .iter()
            .map(|type_id| (*type_id, self.prices.get(type_id).copied()))
            .collect())
    }
}

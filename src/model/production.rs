use serde::{Deserialize, Serialize};

use crate::model::tier::Tier;

/// Daily production of one commodity, summed across every supplied colony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLineItem {
    pub type_id: i64,
    pub type_name: String,
    pub tier: Tier,
    pub daily_quantity: f64,
    /// `None` when the price oracle has no price for the type
    pub unit_price: Option<f64>,
    pub daily_isk_value: f64,
}

/// Line items of one tier, ordered by daily ISK value descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionTierReport {
    pub tier: Tier,
    pub items: Vec<ProductionLineItem>,
    pub daily_isk_value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionReport {
    /// Non-empty tiers in ascending tier order
    pub tiers: Vec<ProductionTierReport>,
    pub total_daily_isk: f64,
    pub total_monthly_isk: f64,
}

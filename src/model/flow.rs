use serde::{Deserialize, Serialize};

use crate::model::tier::Tier;

/// Material of one type moving into or out of a storage pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLine {
    pub type_id: i64,
    pub tier: Tier,
    /// Sum of the contributing routes' quantity per cycle
    pub quantity_per_cycle: i64,
    /// Cycle time of the first contributing route whose far end has one
    pub cycle_time_seconds: Option<i64>,
    /// `None` unless every contributing route resolves a cycle time
    pub daily_quantity: Option<f64>,
    pub route_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageFlowReport {
    pub pin_id: i64,
    pub incoming: Vec<FlowLine>,
    pub outgoing: Vec<FlowLine>,
    /// Net m³ accumulated per day, `None` if any flow is unknown or there are no flows
    pub net_daily_volume: Option<f64>,
    /// Days until the pin is full, only for a known capacity and a positive net volume
    pub fill_days: Option<f64>,
    pub capacity: Option<f64>,
    /// Volume of the pin's current contents in m³
    pub stored_volume: f64,
}

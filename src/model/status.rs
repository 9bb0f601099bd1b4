use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall health of a colony, decided by its most urgent extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColonyStatus {
    Active,
    Expiring,
    Expired,
    Idle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonySummary {
    pub colony_id: i64,
    pub planet_id: i64,
    pub planet_type: String,
    pub solar_system_id: i64,
    pub extractor_count: usize,
    /// Healthy extractors, including those about to expire
    pub active_extractors: usize,
    pub expiring_extractors: usize,
    pub expired_extractors: usize,
    /// Extractors without a running program that have not expired either
    pub idle_extractors: usize,
    pub factory_count: usize,
    pub nearest_expiry: Option<DateTime<Utc>>,
    pub status: ColonyStatus,
}

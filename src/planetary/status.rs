//! Per-colony extractor health summary.

use chrono::{DateTime, Duration, Utc};

use crate::model::{
    colony::Colony,
    status::{ColonyStatus, ColonySummary},
};

/// Look-ahead window in which a running extractor counts as expiring.
pub const EXPIRY_WARNING_HOURS: i64 = 24;

/// Summarizes the extractor and factory state of a colony.
///
/// Each extractor lands in one bucket relative to `now`:
/// - expired: expiry strictly before `now`
/// - idle: not expired but without a positive cycle time
/// - expiring: expiry between `now` and `now + 24h` inclusive, also counted as active
/// - active: expiry further away, or no expiry at all
///
/// The colony status is the most urgent bucket present: expired, then expiring, then active,
/// otherwise idle.
pub fn summarize(colony: &Colony, now: DateTime<Utc>) -> ColonySummary {
    let warning_threshold = now + Duration::hours(EXPIRY_WARNING_HOURS);

    let mut extractor_count = 0;
    let mut active_extractors = 0;
    let mut expiring_extractors = 0;
    let mut expired_extractors = 0;
    let mut idle_extractors = 0;
    let mut nearest_expiry: Option<DateTime<Utc>> = None;

    for (_, extractor) in colony.extractors() {
        extractor_count += 1;

        let has_cycle = extractor
            .cycle_time_seconds
            .is_some_and(|seconds| seconds > 0);

        match extractor.expiry_time {
            Some(expiry) if expiry < now => expired_extractors += 1,
            Some(expiry) => {
                nearest_expiry = Some(nearest_expiry.map_or(expiry, |nearest| nearest.min(expiry)));

                if !has_cycle {
                    idle_extractors += 1;
                } else if expiry <= warning_threshold {
                    expiring_extractors += 1;
                    active_extractors += 1;
                } else {
                    active_extractors += 1;
                }
            }
            None if !has_cycle => idle_extractors += 1,
            None => active_extractors += 1,
        }
    }

    let status = if expired_extractors > 0 {
        ColonyStatus::Expired
    } else if expiring_extractors > 0 {
        ColonyStatus::Expiring
    } else if active_extractors > 0 {
        ColonyStatus::Active
    } else {
        ColonyStatus::Idle
    };

    ColonySummary {
        colony_id: colony.id,
        planet_id: colony.planet_id,
        planet_type: colony.planet_type.clone(),
        solar_system_id: colony.solar_system_id,
        extractor_count,
        active_extractors,
        expiring_extractors,
        expired_extractors,
        idle_extractors,
        factory_count: colony.factories().count(),
        nearest_expiry,
        status,
    }
}

/// Summarizes every colony, keeping the input order.
pub fn summarize_all(colonies: &[Colony], now: DateTime<Utc>) -> Vec<ColonySummary> {
    colonies
        .iter()
        .map(|colony| summarize(colony, now))
        .collect()
}

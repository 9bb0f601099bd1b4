//! Cycle time arithmetic shared by the production and flow calculations.

use chrono::{DateTime, Utc};

use crate::{
    model::colony::{Pin, PinKind},
    planetary::catalog::SchematicCatalog,
};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Converts a per-cycle quantity into a per-day quantity.
///
/// Callers must only pass a positive cycle time, see [`Pin::cycle_time_seconds`].
pub fn per_day(quantity_per_cycle: i64, cycle_time_seconds: i64) -> f64 {
    quantity_per_cycle as f64 * (SECONDS_PER_DAY / cycle_time_seconds as f64)
}

/// Daily output of a single extractor or factory pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyOutput {
    pub type_id: i64,
    pub daily_quantity: f64,
}

impl Pin {
    /// Resolves the pin's cycle time in seconds.
    ///
    /// # Returns
    /// - Extractor: its own cycle time when positive
    /// - Factory: its schematic's cycle time when the schematic exists and the cycle is positive
    /// - `None` for every other pin, and for zero or negative cycles
    pub fn cycle_time_seconds<C: SchematicCatalog + ?Sized>(&self, schematics: &C) -> Option<i64> {
        let cycle_time = match &self.kind {
            PinKind::Extractor(extractor) => extractor.cycle_time_seconds,
            PinKind::Factory(factory) => schematics
                .schematic(factory.schematic_id)
                .map(|schematic| schematic.cycle_time_seconds),
            PinKind::Storage(_) | PinKind::Other => None,
        };

        cycle_time.filter(|seconds| *seconds > 0)
    }

    /// Computes what the pin produces per day.
    ///
    /// Extractors are excluded without a positive cycle time or once their program expired
    /// (expiry strictly before `now`); a missing expiry means the program never ends.
    /// Factories are excluded when their schematic is unknown and never expire.
    ///
    /// # Returns
    /// - `Some(DailyOutput)` - Output type and daily quantity
    /// - `None` - The pin contributes nothing
    pub fn daily_output<C: SchematicCatalog + ?Sized>(
        &self,
        schematics: &C,
        now: DateTime<Utc>,
    ) -> Option<DailyOutput> {
        match &self.kind {
            PinKind::Extractor(extractor) => {
                if extractor.expiry_time.is_some_and(|expiry| expiry < now) {
                    return None;
                }

                let cycle_time = self.cycle_time_seconds(schematics)?;

                Some(DailyOutput {
                    type_id: extractor.product_type_id,
                    daily_quantity: per_day(extractor.qty_per_cycle, cycle_time),
                })
            }
            PinKind::Factory(factory) => {
                let schematic = schematics.schematic(factory.schematic_id)?;
                let cycle_time = self.cycle_time_seconds(schematics)?;

                Some(DailyOutput {
                    type_id: schematic.output.type_id,
                    daily_quantity: per_day(schematic.output.quantity, cycle_time),
                })
            }
            PinKind::Storage(_) | PinKind::Other => None,
        }
    }
}

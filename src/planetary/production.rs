//! Daily production of a set of colonies, classified into tiers and valued in ISK.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::{
        colony::Colony,
        production::{ProductionLineItem, ProductionReport, ProductionTierReport},
        tier::Tier,
    },
    planetary::{
        catalog::{MarketTaxonomy, PriceOracle, SchematicCatalog},
        tier::TierClassifier,
    },
};

/// Days used to extrapolate monthly ISK from daily ISK.
pub const DAYS_PER_MONTH: f64 = 30.0;

pub struct ProductionCalculator<'a, S: ?Sized, T: ?Sized, P> {
    schematics: &'a S,
    taxonomy: &'a T,
    prices: &'a P,
}

impl<'a, S, T, P> ProductionCalculator<'a, S, T, P>
where
    S: SchematicCatalog + ?Sized,
    T: MarketTaxonomy + ?Sized,
    P: PriceOracle,
{
    /// Creates a new instance of [`ProductionCalculator`]
    pub fn new(schematics: &'a S, taxonomy: &'a T, prices: &'a P) -> Self {
        Self {
            schematics,
            taxonomy,
            prices,
        }
    }

    /// Calculates the tiered daily production report for a set of colonies.
    ///
    /// Output of every extractor and factory of every colony is summed per output type, priced
    /// with a single batched price lookup and bucketed by tier. Types without a known price
    /// stay in the report with a daily ISK value of zero.
    ///
    /// # Arguments
    /// - `colonies` - Colonies with their pins loaded
    /// - `now` - Reference time for extractor expiry
    ///
    /// # Returns
    /// - `Ok(ProductionReport)` - Non-empty tiers and totals; empty with zero totals when nothing
    ///   produces
    /// - `Err(Error)` - The price oracle failed
    pub async fn calculate(
        &self,
        colonies: &[Colony],
        now: DateTime<Utc>,
    ) -> Result<ProductionReport, Error> {
        let daily_output = self.aggregate_daily_output(colonies, now);

        if daily_output.is_empty() {
            tracing::debug!(
                "No producing pins across {} colonies, skipping price lookup",
                colonies.len()
            );

            return Ok(ProductionReport::default());
        }

        let type_ids: BTreeSet<i64> = daily_output.keys().copied().collect();
        tracing::debug!("Requesting prices for {} output types", type_ids.len());

        let prices = self.prices.get_prices(&type_ids).await?;

        Ok(self.build_report(daily_output, &prices))
    }

    /// Sum of the daily ISK value of every supplied colony.
    pub async fn total_daily_isk(
        &self,
        colonies: &[Colony],
        now: DateTime<Utc>,
    ) -> Result<f64, Error> {
        Ok(self.calculate(colonies, now).await?.total_daily_isk)
    }

    /// Sums daily output per output type across all pins of all colonies.
    pub fn aggregate_daily_output(
        &self,
        colonies: &[Colony],
        now: DateTime<Utc>,
    ) -> BTreeMap<i64, f64> {
        let mut daily_output = BTreeMap::new();
        let mut excluded = 0;

        for pin in colonies.iter().flat_map(|colony| colony.pins.iter()) {
            if !pin.is_extractor() && !pin.is_factory() {
                continue;
            }

            match pin.daily_output(self.schematics, now) {
                Some(output) => {
                    *daily_output.entry(output.type_id).or_insert(0.0) += output.daily_quantity;
                }
                None => excluded += 1,
            }
        }

        if excluded > 0 {
            tracing::debug!(
                "Excluded {} extractor/factory pins without usable output",
                excluded
            );
        }

        daily_output
    }

    fn build_report(
        &self,
        daily_output: BTreeMap<i64, f64>,
        prices: &HashMap<i64, Option<f64>>,
    ) -> ProductionReport {
        let classifier = TierClassifier::new(self.taxonomy);
        let mut tiers: BTreeMap<Tier, Vec<ProductionLineItem>> = BTreeMap::new();

        for (type_id, daily_quantity) in daily_output {
            let tier = classifier.classify(type_id);
            let unit_price = prices.get(&type_id).copied().flatten();
            let type_name = self
                .taxonomy
                .type_name(type_id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Type {}", type_id));

            tiers.entry(tier).or_default().push(ProductionLineItem {
                type_id,
                type_name,
                tier,
                daily_quantity,
                unit_price,
                daily_isk_value: daily_quantity * unit_price.unwrap_or(0.0),
            });
        }

        let tiers: Vec<ProductionTierReport> = tiers
            .into_iter()
            .map(|(tier, mut items)| {
                // Stable sort, equal values keep ascending type ID order
                items.sort_by(|a, b| b.daily_isk_value.total_cmp(&a.daily_isk_value));
                let daily_isk_value = items.iter().map(|item| item.daily_isk_value).sum();

                ProductionTierReport {
                    tier,
                    items,
                    daily_isk_value,
                }
            })
            .collect();

        let total_daily_isk: f64 = tiers.iter().map(|tier| tier.daily_isk_value).sum();

        ProductionReport {
            tiers,
            total_daily_isk,
            total_monthly_isk: total_daily_isk * DAYS_PER_MONTH,
        }
    }
}

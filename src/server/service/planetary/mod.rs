//! Planetary production service.
//!
//! Loads a character's colonies from the database and runs the planetary calculations over
//! them with the static data catalog and a price oracle.

pub mod assemble;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    error::{planetary::PlanetaryError, Error},
    model::{
        colony::Colony, flow::StorageFlowReport, production::ProductionReport,
        status::ColonySummary,
    },
    planetary::{
        catalog::{PriceOracle, SdeCatalog},
        flow::FlowAnalyzer,
        production::ProductionCalculator,
        status,
    },
    server::{data::planetary::ColonyRepository, service::planetary::assemble::assemble_colonies},
};

/// Service answering production, status and logistics questions for a character's colonies.
pub struct PlanetaryService<'a, P> {
    db: &'a DatabaseConnection,
    catalog: &'a SdeCatalog,
    prices: &'a P,
}

impl<'a, P: PriceOracle> PlanetaryService<'a, P> {
    /// Creates a new instance of [`PlanetaryService`].
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `catalog` - Static data catalog used as schematic catalog and market taxonomy
    /// - `prices` - Price oracle used to value production
    pub fn new(db: &'a DatabaseConnection, catalog: &'a SdeCatalog, prices: &'a P) -> Self {
        Self {
            db,
            catalog,
            prices,
        }
    }

    /// Loads every colony of a character with pins, contents and routes.
    ///
    /// # Returns
    /// - `Ok(Vec<Colony>)` - Colonies ordered by planet ID, empty if the character has none
    /// - `Err(Error::DbErr)` - Database query failed
    /// - `Err(Error::PlanetaryError)` - Stored colony data is inconsistent
    pub async fn get_colonies(&self, character_id: i64) -> Result<Vec<Colony>, Error> {
        let colony_repo = ColonyRepository::new(self.db);

        let colonies = colony_repo.get_many_by_character_id(character_id).await?;

        self.load_colonies(colonies).await
    }

    /// Calculates the tiered daily production report of all colonies of a character.
    ///
    /// # Returns
    /// - `Ok(ProductionReport)` - Report, empty when nothing produces
    /// - `Err(Error)` - Loading colonies or fetching prices failed
    pub async fn production_report(
        &self,
        character_id: i64,
        now: DateTime<Utc>,
    ) -> Result<ProductionReport, Error> {
        let colonies = self.get_colonies(character_id).await?;
        let calculator = ProductionCalculator::new(self.catalog, self.catalog, self.prices);

        let report = calculator.calculate(&colonies, now).await?;

        tracing::info!(
            "Character {} produces {:.2} ISK/day across {} colonies",
            character_id,
            report.total_daily_isk,
            colonies.len()
        );

        Ok(report)
    }

    /// Daily ISK value of all colonies of a character
    pub async fn total_daily_isk(
        &self,
        character_id: i64,
        now: DateTime<Utc>,
    ) -> Result<f64, Error> {
        Ok(self
            .production_report(character_id, now)
            .await?
            .total_daily_isk)
    }

    /// Summarizes the extractor health of every colony of a character
    pub async fn colony_summaries(
        &self,
        character_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<ColonySummary>, Error> {
        let colonies = self.get_colonies(character_id).await?;

        Ok(status::summarize_all(&colonies, now))
    }

    /// Analyzes the material flow through a storage pin of a character's colony.
    ///
    /// # Arguments
    /// - `character_id` - EVE Online character ID owning the colony
    /// - `planet_id` - Planet the colony is on
    /// - `pin_id` - EVE pin ID of the storage pin
    ///
    /// # Returns
    /// - `Ok(StorageFlowReport)` - Flows and capacity forecast of the pin
    /// - `Err(Error::PlanetaryError(ColonyNotFound))` - Character has no colony on the planet
    /// - `Err(Error::PlanetaryError(PinNotFound))` - Pin is not part of the colony
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn storage_flow(
        &self,
        character_id: i64,
        planet_id: i64,
        pin_id: i64,
    ) -> Result<StorageFlowReport, Error> {
        let colony_repo = ColonyRepository::new(self.db);

        let colony = colony_repo
            .get_by_character_and_planet(character_id, planet_id)
            .await?
            .ok_or(PlanetaryError::ColonyNotFound {
                character_id,
                planet_id,
            })?;

        let colonies = self.load_colonies(vec![colony]).await?;
        let analyzer = FlowAnalyzer::new(self.catalog, self.catalog);

        match colonies.first() {
            Some(colony) => analyzer.analyze(colony, pin_id),
            None => Err(PlanetaryError::ColonyNotFound {
                character_id,
                planet_id,
            }
            .into()),
        }
    }

    async fn load_colonies(
        &self,
        colonies: Vec<entity::planetary_colony::Model>,
    ) -> Result<Vec<Colony>, Error> {
        let colony_repo = ColonyRepository::new(self.db);

        let colony_ids: Vec<i32> = colonies.iter().map(|colony| colony.id).collect();
        let pins = colony_repo.get_pins(&colony_ids).await?;
        let pin_ids: Vec<i32> = pins.iter().map(|pin| pin.id).collect();
        let contents = colony_repo.get_pin_contents(&pin_ids).await?;
        let routes = colony_repo.get_routes(&colony_ids).await?;

        match assemble_colonies(colonies, pins, contents, routes) {
            Ok(colonies) => Ok(colonies),
            Err(e) => {
                tracing::warn!("Rejecting stored colonies: {}", e);

                Err(e.into())
            }
        }
    }
}

//! Declarative test builder.
//!
//! The builder collects tables, static data and mock endpoints; everything is created during
//! the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, fixtures::esi::MockMarketPrice, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_planetary_tables: bool,
    include_sde_tables: bool,
    include_standard_catalog: bool,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    market_price_endpoints: Vec<(Vec<MockMarketPrice>, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_planetary_tables: false,
            include_sde_tables: false,
            include_standard_catalog: false,
            mock_builders: Vec::new(),
            market_price_endpoints: Vec::new(),
        }
    }

    /// Add the colony, pin, pin content and route tables.
    pub fn with_planetary_tables(mut self) -> Self {
        self.include_planetary_tables = true;
        self
    }

    /// Add the static data tables (schematics, market groups, types).
    pub fn with_sde_tables(mut self) -> Self {
        self.include_sde_tables = true;
        self
    }

    /// Add the static data tables and fill them with the standard test catalog.
    ///
    /// See [`SdeFixtures::insert_standard_catalog`](crate::fixtures::sde::SdeFixtures::insert_standard_catalog).
    pub fn with_standard_catalog(mut self) -> Self {
        self.include_sde_tables = true;
        self.include_standard_catalog = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pi_ledger_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), pi_ledger_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::PlanetaryColony)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add mock ESI market prices endpoint to the test server.
    ///
    /// Creates a mock HTTP endpoint at `/markets/prices/` returning the provided prices. The
    /// mock will verify it was called exactly `expected_requests` times.
    pub fn with_market_prices_endpoint(
        mut self,
        prices: Vec<MockMarketPrice>,
        expected_requests: usize,
    ) -> Self {
        self.market_price_endpoints
            .push((prices, expected_requests));
        self
    }

    /// Add a custom mock endpoint to the test server.
    ///
    /// Custom endpoints are created before the shortcut endpoints, allowing tests to register
    /// an error response that is matched first.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Tables created, fixtures inserted and endpoints mocked
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_planetary_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PlanetaryColony),
                schema.create_table_from_entity(entity::prelude::PlanetaryPin),
                schema.create_table_from_entity(entity::prelude::PlanetaryPinContent),
                schema.create_table_from_entity(entity::prelude::PlanetaryRoute),
            ]);
        }

        if self.include_sde_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::SdePlanetSchematic),
                schema.create_table_from_entity(entity::prelude::SdePlanetSchematicType),
                schema.create_table_from_entity(entity::prelude::SdeMarketGroup),
                schema.create_table_from_entity(entity::prelude::SdeType),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        if self.include_standard_catalog {
            setup.sde().insert_standard_catalog().await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (prices, expected) in self.market_price_endpoints {
            mocks.push(setup.esi().create_market_prices_endpoint(&prices, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

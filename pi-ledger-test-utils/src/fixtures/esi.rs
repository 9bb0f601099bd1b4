//! ESI HTTP mock endpoint creation utilities.

use mockito::Mock;
use serde_json::json;

use crate::TestContext;

/// One entry of the mocked `/markets/prices/` response.
#[derive(Debug, Clone, Copy)]
pub struct MockMarketPrice {
    pub type_id: i64,
    pub average_price: Option<f64>,
    pub adjusted_price: Option<f64>,
}

impl MockMarketPrice {
    /// Entry with both prices set to the same value
    pub fn new(type_id: i64, price: f64) -> Self {
        Self {
            type_id,
            average_price: Some(price),
            adjusted_price: Some(price),
        }
    }
}

impl TestContext {
    pub fn esi(&mut self) -> EsiFixtures<'_> {
        EsiFixtures { setup: self }
    }
}

pub struct EsiFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> EsiFixtures<'a> {
    /// Create a mock HTTP endpoint for the market price table.
    ///
    /// Sets up a mock GET endpoint at `/markets/prices/` returning the prices as JSON. Missing
    /// prices are omitted from the entry like ESI does.
    ///
    /// # Arguments
    /// - `prices` - Entries to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_market_prices_endpoint(
        &mut self,
        prices: &[MockMarketPrice],
        expected_requests: usize,
    ) -> Mock {
        let body: Vec<serde_json::Value> = prices
            .iter()
            .map(|price| {
                let mut entry = json!({ "type_id": price.type_id });
                if let Some(average_price) = price.average_price {
                    entry["average_price"] = json!(average_price);
                }
                if let Some(adjusted_price) = price.adjusted_price {
                    entry["adjusted_price"] = json!(adjusted_price);
                }
                entry
            })
            .collect();

        self.setup
            .server
            .mock("GET", "/markets/prices/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::Value::Array(body).to_string())
            .expect(expected_requests)
            .create()
    }
}

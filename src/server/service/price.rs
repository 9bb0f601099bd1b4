//! ESI market price oracle.
//!
//! ESI publishes one table of average and adjusted prices for every market type at
//! `/markets/prices/`. The table is fetched as a whole and reused for the configured cache
//! lifetime, so any number of production reports within that window cost a single request.

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
    time::{Duration, Instant},
};

use dioxus_logger::tracing;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    error::{price::PriceError, Error},
    planetary::catalog::PriceOracle,
};

/// Default lifetime of the cached price table.
pub const DEFAULT_PRICE_TTL: Duration = Duration::from_secs(60 * 60);

/// Entry of the ESI `/markets/prices/` response.
#[derive(Debug, Deserialize)]
struct MarketPrice {
    type_id: i64,
    average_price: Option<f64>,
    adjusted_price: Option<f64>,
}

struct CachedPrices {
    prices: HashMap<i64, f64>,
    fetched_at: Instant,
}

/// Price oracle backed by the ESI market price table.
#[derive(Clone)]
pub struct EsiPriceOracle {
    http: Client,
    prices_url: Url,
    cache: Arc<Mutex<Option<CachedPrices>>>,
    ttl: Duration,
}

impl EsiPriceOracle {
    /// Creates a new instance of [`EsiPriceOracle`].
    ///
    /// # Arguments
    /// - `esi_url` - ESI base URL, e.g. `https://esi.evetech.net/latest`
    /// - `user_agent` - User agent sent with every request
    ///
    /// # Returns
    /// - `Ok(EsiPriceOracle)` - Oracle with an empty cache
    /// - `Err(Error::PriceError)` - The base URL cannot be parsed
    /// - `Err(Error::ReqwestError)` - The HTTP client could not be built
    pub fn new(esi_url: &str, user_agent: &str) -> Result<Self, Error> {
        let url = format!("{}/markets/prices/", esi_url.trim_end_matches('/'));
        let prices_url = Url::parse(&url).map_err(|e| PriceError::InvalidUrl {
            url: esi_url.to_string(),
            reason: e.to_string(),
        })?;
        let http = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http,
            prices_url,
            cache: Arc::new(Mutex::new(None)),
            ttl: DEFAULT_PRICE_TTL,
        })
    }

    /// Sets how long a fetched price table is reused before fetching again
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    async fn fetch_prices(&self) -> Result<HashMap<i64, f64>, Error> {
        let response = self.http.get(self.prices_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::UnexpectedStatus(status.as_u16()).into());
        }

        let entries: Vec<MarketPrice> = response.json().await?;

        // Types without any price are left out of the table
        let prices: HashMap<i64, f64> = entries
            .into_iter()
            .filter_map(|entry| {
                entry
                    .average_price
                    .or(entry.adjusted_price)
                    .map(|price| (entry.type_id, price))
            })
            .collect();

        tracing::debug!("Fetched {} market prices from ESI", prices.len());

        Ok(prices)
    }
}

impl PriceOracle for EsiPriceOracle {
    async fn get_prices(
        &self,
        type_ids: &BTreeSet<i64>,
    ) -> Result<HashMap<i64, Option<f64>>, Error> {
        // Held across the fetch, concurrent lookups share one request
        let mut cache = self.cache.lock().await;

        let fresh = cache
            .as_ref()
            .is_some_and(|cached| cached.fetched_at.elapsed() < self.ttl);

        if !fresh {
            let prices = self.fetch_prices().await?;

            *cache = Some(CachedPrices {
                prices,
                fetched_at: Instant::now(),
            });
        }

        let prices = cache.as_ref().map(|cached| &cached.prices);

        Ok(type_ids
            .iter()
            .map(|type_id| {
                (
                    *type_id,
                    prices.and_then(|prices| prices.get(type_id).copied()),
                )
            })
            .collect())
    }
}

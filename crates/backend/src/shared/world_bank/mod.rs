pub mod api_client;
pub mod country_cache;
pub mod payload;

use async_trait::async_trait;
use contracts::dashboards::d400_country_explorer::table::Observation;
use contracts::domain::a001_country::aggregate::CountryCatalog;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;

use crate::shared::config::WorldBankConfig;
use api_client::WorldBankApiClient;
use country_cache::CountryCatalogCache;

/// Failures talking to the World Bank API
#[derive(Debug, Error)]
pub enum WorldBankError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("World Bank API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse World Bank response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected World Bank payload: {0}")]
    UnexpectedShape(String),

    #[error("World Bank API error: {0}")]
    Api(String),
}

/// Source of country listings and per-country indicator series
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Sovereign countries keyed by display name (aggregates and the
    /// coordinate-less territories already removed)
    async fn list_countries(&self) -> Result<CountryCatalog, WorldBankError>;

    /// Yearly observations of one indicator for one country, in upstream order.
    /// Records without a `value` field are omitted; `null` values are kept as missing.
    async fn fetch_series(
        &self,
        country_id: &str,
        indicator_code: &str,
    ) -> Result<Vec<Observation>, WorldBankError>;
}

/// Process-wide data source together with its country catalog snapshot
pub struct WorldBank {
    pub source: Arc<dyn DataSource>,
    pub countries: CountryCatalogCache,
}

static WORLD_BANK: OnceCell<WorldBank> = OnceCell::new();

pub fn initialize(config: &WorldBankConfig) -> anyhow::Result<()> {
    let client = WorldBankApiClient::new(config.clone())?;
    WORLD_BANK
        .set(WorldBank {
            source: Arc::new(client),
            countries: CountryCatalogCache::new(),
        })
        .map_err(|_| anyhow::anyhow!("World Bank data source already initialized"))?;
    tracing::info!("World Bank data source ready: {}", config.base_url);
    Ok(())
}

/// `None` until [`initialize`] has run
pub fn get() -> Option<&'static WorldBank> {
    WORLD_BANK.get()
}

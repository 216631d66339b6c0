use contracts::domain::a001_country::aggregate::CountryCatalog;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::{DataSource, WorldBankError};

/// Load-once snapshot of the country listing.
///
/// The first successful load is kept for the lifetime of the process and is
/// never invalidated. A failed load leaves the cache empty, so the next caller
/// retries.
#[derive(Default)]
pub struct CountryCatalogCache {
    cell: OnceCell<Arc<CountryCatalog>>,
}

impl CountryCatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_load(
        &self,
        source: &dyn DataSource,
    ) -> Result<Arc<CountryCatalog>, WorldBankError> {
        let catalog = self
            .cell
            .get_or_try_init(|| async {
                tracing::info!("Country catalog not cached yet, loading");
                source.list_countries().await.map(Arc::new)
            })
            .await?;
        Ok(Arc::clone(catalog))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

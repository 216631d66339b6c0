use async_trait::async_trait;
use contracts::dashboards::d400_country_explorer::table::Observation;
use contracts::domain::a001_country::aggregate::CountryCatalog;

use super::payload::{parse_countries, parse_series};
use super::{DataSource, WorldBankError};
use crate::shared::config::WorldBankConfig;

/// HTTP client for the World Bank Indicators API v2
pub struct WorldBankApiClient {
    client: reqwest::Client,
    config: WorldBankConfig,
}

impl WorldBankApiClient {
    pub fn new(config: WorldBankConfig) -> Result<Self, WorldBankError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    pub fn countries_url(&self) -> String {
        format!("{}/country", self.base_url())
    }

    pub fn series_url(&self, country_id: &str, indicator_code: &str) -> String {
        format!(
            "{}/country/{}/indicator/{}",
            self.base_url(),
            urlencoding::encode(country_id),
            urlencoding::encode(indicator_code)
        )
    }

    async fn get_json_text(&self, url: &str, per_page: u32) -> Result<String, WorldBankError> {
        tracing::debug!("GET {}?format=json&per_page={}", url, per_page);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .query(&[("format", "json".to_string()), ("per_page", per_page.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("World Bank API request failed: {} {}", status, body);
            return Err(WorldBankError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl DataSource for WorldBankApiClient {
    async fn list_countries(&self) -> Result<CountryCatalog, WorldBankError> {
        let body = self
            .get_json_text(&self.countries_url(), self.config.countries_per_page)
            .await?;
        let catalog = parse_countries(&body)?;
        if catalog.is_empty() {
            tracing::warn!("World Bank country listing contained no sovereign countries");
        } else {
            tracing::info!("Loaded {} countries from World Bank", catalog.len());
        }
        Ok(catalog)
    }

    async fn fetch_series(
        &self,
        country_id: &str,
        indicator_code: &str,
    ) -> Result<Vec<Observation>, WorldBankError> {
        let url = self.series_url(country_id, indicator_code);
        let body = self
            .get_json_text(&url, self.config.series_per_page)
            .await?;
        let observations = parse_series(&body)?;
        tracing::debug!(
            "Fetched {} observations of {} for {}",
            observations.len(),
            indicator_code,
            country_id
        );
        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> WorldBankConfig {
        WorldBankConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            countries_per_page: 300,
            series_per_page: 100,
        }
    }

    #[test]
    fn test_urls_trim_trailing_slash() {
        let client = WorldBankApiClient::new(config("https://api.worldbank.org/v2/")).unwrap();
        assert_eq!(client.countries_url(), "https://api.worldbank.org/v2/country");
        assert_eq!(
            client.series_url("AFG", "NY.GDP.MKTP.CD"),
            "https://api.worldbank.org/v2/country/AFG/indicator/NY.GDP.MKTP.CD"
        );
    }

    #[test]
    fn test_series_url_encodes_path_segments() {
        let client = WorldBankApiClient::new(config("http://localhost:9000")).unwrap();
        assert_eq!(
            client.series_url("A B", "X/Y"),
            "http://localhost:9000/country/A%20B/indicator/X%2FY"
        );
    }
}

use contracts::dashboards::d400_country_explorer::dto::{ExploreRequest, ExploreResponse};
use contracts::dashboards::d400_country_explorer::table::{AlignmentOutcome, CountrySeries};
use contracts::domain::a001_country::aggregate::MapPoint;
use thiserror::Error;

use super::{aligner, chart};
use crate::shared::indicators::metadata;
use crate::shared::world_bank::country_cache::CountryCatalogCache;
use crate::shared::world_bank::{DataSource, WorldBankError};

#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("No countries selected")]
    EmptySelection,

    #[error("No indicator selected")]
    BlankIndicator,

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Invalid year range: {from} > {to}")]
    InvalidYearRange { from: i32, to: i32 },

    #[error(transparent)]
    Upstream(#[from] WorldBankError),
}

/// Message shown when the whole selection has no data
pub fn no_data_message(country_count: usize) -> String {
    if country_count == 1 {
        "This country has no available data for the selected indicator.".to_string()
    } else {
        "These countries have no available data for the selected indicator.".to_string()
    }
}

/// Selected names without repeats, first occurrence kept
fn distinct_selection(countries: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(countries.len());
    for name in countries {
        if !seen.contains(name) {
            seen.push(name.clone());
        }
    }
    seen
}

/// Country names for the picker, alphabetical
pub async fn country_names(
    source: &dyn DataSource,
    cache: &CountryCatalogCache,
) -> Result<Vec<String>, ExploreError> {
    Ok(cache.get_or_load(source).await?.names())
}

/// Map markers of the selected countries; countries without coordinates are skipped
pub async fn map_points(
    source: &dyn DataSource,
    cache: &CountryCatalogCache,
    countries: &[String],
) -> Result<Vec<MapPoint>, ExploreError> {
    let catalog = cache.get_or_load(source).await?;
    let mut points = Vec::new();
    for name in distinct_selection(countries) {
        let country = catalog
            .get(&name)
            .ok_or_else(|| ExploreError::UnknownCountry(name.clone()))?;
        match country.coordinates() {
            Some((latitude, longitude)) => points.push(MapPoint {
                name,
                latitude,
                longitude,
            }),
            None => tracing::debug!("No coordinates for {}, not shown on map", name),
        }
    }
    Ok(points)
}

/// Fetch, align and shape the selected series for rendering
pub async fn explore(
    source: &dyn DataSource,
    cache: &CountryCatalogCache,
    request: ExploreRequest,
) -> Result<ExploreResponse, ExploreError> {
    let code = request.indicator_code.trim().to_string();
    if code.is_empty() {
        return Err(ExploreError::BlankIndicator);
    }
    let selection = distinct_selection(&request.countries);
    if selection.is_empty() {
        return Err(ExploreError::EmptySelection);
    }
    if let (Some(from), Some(to)) = (request.year_from, request.year_to) {
        if from > to {
            return Err(ExploreError::InvalidYearRange { from, to });
        }
    }

    let catalog = cache.get_or_load(source).await?;
    let percentage = metadata::is_percentage(&code);
    match metadata::find_by_code(&code) {
        Some(indicator) => tracing::info!(
            "Exploring \"{}\" ({:?}) for {} countries",
            indicator.name,
            indicator.category,
            selection.len()
        ),
        None => tracing::info!(
            "Exploring uncatalogued indicator {} for {} countries",
            code,
            selection.len()
        ),
    }

    // One upstream request at a time, in selection order
    let mut series = Vec::with_capacity(selection.len());
    for name in &selection {
        let country = catalog
            .get(name)
            .ok_or_else(|| ExploreError::UnknownCountry(name.clone()))?;
        let observations = source.fetch_series(&country.id, &code).await?;
        series.push(CountrySeries::new(name.clone(), observations));
    }

    match aligner::align_series(&series, percentage) {
        AlignmentOutcome::NoData { country_count } => {
            tracing::info!(
                "No data for {} across {} selected countries",
                code,
                country_count
            );
            Ok(ExploreResponse::NoData {
                country_count,
                message: no_data_message(country_count),
            })
        }
        AlignmentOutcome::Aligned {
            table,
            window,
            country_count,
        } => {
            let visible = chart::visible_range(window, request.year_from, request.year_to)
                .ok_or(ExploreError::InvalidYearRange {
                    from: request.year_from.unwrap_or(window.min_year),
                    to: request.year_to.unwrap_or(window.max_year),
                })?;
            let table = chart::filter_years(&table, visible);

            tracing::info!(
                "Aligned {} for {} countries: {}..={} ({} rows visible)",
                code,
                country_count,
                window.min_year,
                window.max_year,
                table.rows.len()
            );

            Ok(ExploreResponse::Data {
                indicator_code: code,
                percentage,
                country_count,
                window,
                visible,
                charts: chart::chart_specs(percentage),
                points: chart::melt(&table),
                table_view: chart::table_view(&table),
                table,
            })
        }
    }
}

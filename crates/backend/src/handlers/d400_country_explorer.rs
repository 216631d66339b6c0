use axum::{http::StatusCode, Json};
use contracts::dashboards::d400_country_explorer::dto::{ExploreRequest, ExploreResponse};
use contracts::domain::a001_country::aggregate::{
    CountryListResponse, MapPoint, MapPointsRequest,
};
use contracts::domain::a002_indicator::aggregate::IndicatorCatalogResponse;

use crate::dashboards::d400_country_explorer::service::{self, ExploreError};
use crate::shared::indicators::metadata;
use crate::shared::world_bank::{self, WorldBank};

fn data_source() -> Result<&'static WorldBank, StatusCode> {
    world_bank::get().ok_or_else(|| {
        tracing::error!("World Bank data source has not been initialized");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn status_for(e: &ExploreError) -> StatusCode {
    match e {
        ExploreError::EmptySelection
        | ExploreError::BlankIndicator
        | ExploreError::InvalidYearRange { .. } => StatusCode::BAD_REQUEST,
        ExploreError::UnknownCountry(_) => StatusCode::NOT_FOUND,
        ExploreError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

fn log_and_map(context: &str, e: ExploreError) -> StatusCode {
    let status = status_for(&e);
    if status.is_server_error() {
        tracing::error!("{}: {}", context, e);
    } else {
        tracing::warn!("{}: {}", context, e);
    }
    status
}

/// GET /api/d400/indicators
pub async fn get_indicator_catalog() -> Json<IndicatorCatalogResponse> {
    Json(metadata::build_catalog())
}

/// GET /api/d400/countries
pub async fn list_countries() -> Result<Json<CountryListResponse>, StatusCode> {
    let wb = data_source()?;
    match service::country_names(wb.source.as_ref(), &wb.countries).await {
        Ok(names) => Ok(Json(CountryListResponse { names })),
        Err(e) => Err(log_and_map("Failed to list countries", e)),
    }
}

/// POST /api/d400/map
pub async fn get_map_points(
    Json(request): Json<MapPointsRequest>,
) -> Result<Json<Vec<MapPoint>>, StatusCode> {
    let wb = data_source()?;
    match service::map_points(wb.source.as_ref(), &wb.countries, &request.countries).await {
        Ok(points) => Ok(Json(points)),
        Err(e) => Err(log_and_map("Failed to build map points", e)),
    }
}

/// POST /api/d400/explore
pub async fn explore(
    Json(request): Json<ExploreRequest>,
) -> Result<Json<ExploreResponse>, StatusCode> {
    let wb = data_source()?;
    match service::explore(wb.source.as_ref(), &wb.countries, request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(log_and_map("Failed to explore indicator", e)),
    }
}

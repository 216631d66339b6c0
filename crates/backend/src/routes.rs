use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Country Explorer
        .route(
            "/api/d400/indicators",
            get(handlers::d400_country_explorer::get_indicator_catalog),
        )
        .route(
            "/api/d400/countries",
            get(handlers::d400_country_explorer::list_countries),
        )
        .route(
            "/api/d400/map",
            post(handlers::d400_country_explorer::get_map_points),
        )
        .route(
            "/api/d400/explore",
            post(handlers::d400_country_explorer::explore),
        )
}

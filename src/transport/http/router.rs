use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::transport::http::handlers::{health, home, weather};
use crate::transport::http::types::AppState;

/// Builds the routing table.
///
/// The literal `/weather/summary` route is registered ahead of the
/// `/weather/:location` capture; "summary" must never be treated as a
/// location code.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::healthcheck_handler))
        .route("/weather/summary", get(weather::monthly_summary_handler))
        .route("/weather/:location", get(weather::city_weather_handler))
        .nest_service("/public", ServeDir::new("public"))
        .with_state(app_state)
}

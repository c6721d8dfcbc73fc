use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::domain::location;
use crate::transport::http::types::{AppState, WebError};
use crate::transport::http::views::{CityWeatherTemplate, MonthlySummaryTemplate};

/// GET /weather/:location — detail page for one city.
///
/// The location code is validated against the static set before any SQL is
/// built; unknown codes 404 without touching the database.
pub async fn city_weather_handler(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Html<String>, WebError> {
    let entry =
        location::resolve(&location).ok_or_else(|| WebError::UnknownLocation(location.clone()))?;

    let records = state.store.fetch_city_weather(entry.table_name).await?;

    let page = CityWeatherTemplate {
        page_title: format!("Weather for {}", entry.display_name),
        location_code: entry.code,
        location_name: entry.display_name,
        records: &records,
    };
    Ok(Html(page.render()?))
}

/// GET /weather/summary — monthly aggregate across all locations.
pub async fn monthly_summary_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, WebError> {
    let records = state.store.fetch_monthly_summary().await?;

    let page = MonthlySummaryTemplate {
        page_title: "Monthly weather summary",
        records: &records,
    };
    Ok(Html(page.render()?))
}

use askama::Template;
use axum::response::Html;

use crate::domain::location;
use crate::transport::http::types::WebError;
use crate::transport::http::views::HomeTemplate;

/// GET / — static landing page listing the known locations. No data access.
pub async fn home_handler() -> Result<Html<String>, WebError> {
    let page = HomeTemplate {
        page_title: "Weather data mart",
        locations: location::all(),
    };
    Ok(Html(page.render()?))
}

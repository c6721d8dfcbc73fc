use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::app::weather_store::{DataAccessError, WeatherStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WeatherStore>,
}

/// Payload of the health endpoint.
#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything a page handler can fail with, mapped to an HTTP status at the
/// boundary. Database and template failures are logged server-side; the
/// client only ever sees a generic message.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("unknown location code: {0}")]
    UnknownLocation(String),

    #[error(transparent)]
    DataAccess(#[from] DataAccessError),

    #[error(transparent)]
    Render(#[from] askama::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::UnknownLocation(code) => (
                StatusCode::NOT_FOUND,
                format!("Location '{code}' does not exist or is not supported yet."),
            )
                .into_response(),
            WebError::DataAccess(err) => {
                tracing::error!(error = %err, "weather query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error while loading weather data.",
                )
                    .into_response()
            }
            WebError::Render(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error while loading weather data.",
                )
                    .into_response()
            }
        }
    }
}

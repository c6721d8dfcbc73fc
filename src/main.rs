use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use weather_mart_web::infra::config;
use weather_mart_web::transport;
use weather_mart_web::{MySqlWeatherStore, WeatherStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = MySqlWeatherStore::from_env();

    // Probe the database once at startup. A failure is logged but does not
    // stop the server: the static pages stay available and the pool retries
    // on the next request.
    match store.ping().await {
        Ok(()) => tracing::info!("database connection established"),
        Err(e) => tracing::warn!(error = %e, "database unreachable at startup; continuing"),
    }

    let store: Arc<dyn WeatherStore> = Arc::new(store);
    let app = transport::http::create_router(transport::http::AppState { store });

    let port = config::listen_port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on http://0.0.0.0:{port}");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}

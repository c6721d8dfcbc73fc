//! HTTP surface tests against a stub store.
//!
//! Each test boots the real router on an ephemeral port, the way the server
//! binary does, and drives it with a plain HTTP client. The store is a stub
//! so no database is needed; call counters assert which layer a request
//! reached.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use weather_mart_web::transport;
use weather_mart_web::{DataAccessError, RecordSet, WeatherStore};

#[derive(Default)]
struct StubStore {
    city_calls: AtomicUsize,
    summary_calls: AtomicUsize,
    last_table: Mutex<Option<String>>,
    fail: bool,
}

impl StubStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn db_error() -> DataAccessError {
        DataAccessError::from(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl WeatherStore for StubStore {
    async fn fetch_city_weather(&self, table_name: &str) -> Result<RecordSet, DataAccessError> {
        self.city_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_table.lock().unwrap() = Some(table_name.to_string());
        if self.fail {
            return Err(Self::db_error());
        }
        Ok(city_fixture())
    }

    async fn fetch_monthly_summary(&self) -> Result<RecordSet, DataAccessError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::db_error());
        }
        Ok(summary_fixture())
    }

    async fn ping(&self) -> Result<(), DataAccessError> {
        if self.fail {
            return Err(Self::db_error());
        }
        Ok(())
    }
}

/// Rows already in `date_time` ascending order, as the mart query returns
/// them.
fn city_fixture() -> RecordSet {
    RecordSet::new(
        vec![
            "date_sk".into(),
            "location_key".into(),
            "date_time".into(),
            "min_temp_c".into(),
            "max_temp_c".into(),
        ],
        vec![
            row(&["20240101", "353412", "2024-01-01 07:00:00", "15.2", "21.8"]),
            row(&["20240102", "353412", "2024-01-02 07:00:00", "14.7", "20.1"]),
            row(&["20240103", "353412", "2024-01-03 07:00:00", "16.0", "23.4"]),
        ],
    )
}

/// Rows sorted by month key, then location key.
fn summary_fixture() -> RecordSet {
    RecordSet::new(
        vec![
            "month_sk".into(),
            "location_key".into(),
            "avg_max_temp_c".into(),
        ],
        vec![
            row(&["202401", "353412", "21.5"]),
            row(&["202401", "353981", "30.9"]),
            row(&["202402", "353412", "19.8"]),
        ],
    )
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

async fn spawn_app(store: Arc<StubStore>) -> SocketAddr {
    let store: Arc<dyn WeatherStore> = store;
    let app = transport::http::create_router(transport::http::AppState { store });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn home_page_lists_known_locations() {
    let store = Arc::new(StubStore::default());
    let addr = spawn_app(store.clone()).await;

    let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.text().await.unwrap();
    assert!(body.contains("/weather/hn"));
    assert!(body.contains("/weather/dn"));
    assert!(body.contains("/weather/hcm"));
    assert_eq!(store.city_calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.summary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn city_page_renders_rows_in_store_order() {
    let store = Arc::new(StubStore::default());
    let addr = spawn_app(store.clone()).await;

    let resp = reqwest::get(format!("http://{addr}/weather/hn"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Ha Noi"));

    // The resolver, not the request, supplied the table name.
    assert_eq!(store.city_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        store.last_table.lock().unwrap().as_deref(),
        Some("dm_hanoi")
    );

    // Timestamps appear in the order the store returned them (ascending).
    let first = body.find("2024-01-01 07:00:00").unwrap();
    let second = body.find("2024-01-02 07:00:00").unwrap();
    let third = body.find("2024-01-03 07:00:00").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn unknown_location_is_404_without_touching_the_store() {
    let store = Arc::new(StubStore::default());
    let addr = spawn_app(store.clone()).await;

    let resp = reqwest::get(format!("http://{addr}/weather/xx"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body = resp.text().await.unwrap();
    assert!(body.contains("xx"));
    assert_eq!(store.city_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn summary_route_is_not_captured_as_a_location_code() {
    let store = Arc::new(StubStore::default());
    let addr = spawn_app(store.clone()).await;

    let resp = reqwest::get(format!("http://{addr}/weather/summary"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Monthly weather summary"));
    assert_eq!(store.summary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.city_calls.load(Ordering::SeqCst), 0);

    // Summary rows keep the (month, location) ordering from the store.
    let first = body.find("202401").unwrap();
    let last = body.find("202402").unwrap();
    assert!(first < last);
}

#[tokio::test]
async fn database_failure_returns_a_generic_500() {
    let store = Arc::new(StubStore::failing());
    let addr = spawn_app(store.clone()).await;

    let resp = reqwest::get(format!("http://{addr}/weather/hn"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);

    let body = resp.text().await.unwrap();
    assert_eq!(body, "Server error while loading weather data.");
    assert!(!body.contains("pool timed out"));
    assert_eq!(store.city_calls.load(Ordering::SeqCst), 1);

    let resp = reqwest::get(format!("http://{addr}/weather/summary"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
}

#[tokio::test]
async fn health_reflects_store_connectivity() {
    let ok_addr = spawn_app(Arc::new(StubStore::default())).await;
    let resp = reqwest::get(format!("http://{ok_addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let bad_addr = spawn_app(Arc::new(StubStore::failing())).await;
    let resp = reqwest::get(format!("http://{bad_addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 503);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "unhealthy");
}

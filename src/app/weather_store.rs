//! Read-only access to the weather data mart.
//!
//! Two queries back the whole site: the per-city detail tables and the fixed
//! monthly aggregate table. Both run through the shared connection pool and
//! surface failures as [`DataAccessError`]; there are no retries and no
//! writes.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::{Column, Row, TypeInfo};

use crate::domain::record::RecordSet;
use crate::infra::config;

/// Any failure while talking to the database. Handlers translate this into a
/// generic 500; the detail stays in the server log.
#[derive(Debug, thiserror::Error)]
#[error("data access error: {0}")]
pub struct DataAccessError(#[from] sqlx::Error);

#[async_trait]
pub trait WeatherStore: Send + Sync {
    /// `SELECT *` from one city's detail table, oldest observation first.
    ///
    /// `table_name` is interpolated into the statement because identifiers
    /// cannot be bound as parameters. Callers must only pass table names
    /// from the static location set, never raw request input.
    async fn fetch_city_weather(&self, table_name: &str) -> Result<RecordSet, DataAccessError>;

    /// The fixed monthly aggregate, ordered by month then location.
    async fn fetch_monthly_summary(&self) -> Result<RecordSet, DataAccessError>;

    /// Cheap connectivity probe used at startup and by the health endpoint.
    async fn ping(&self) -> Result<(), DataAccessError>;
}

/// [`WeatherStore`] backed by a MySQL connection pool.
pub struct MySqlWeatherStore {
    pool: MySqlPool,
}

impl MySqlWeatherStore {
    /// Builds the pool from environment configuration.
    ///
    /// The pool is created lazily: no connection is opened until the first
    /// query, so the server comes up even while the database is down.
    pub fn from_env() -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config::db_host())
            .port(config::db_port())
            .username(&config::db_user())
            .password(&config::db_password())
            .database(&config::db_name());

        let pool = MySqlPoolOptions::new()
            .max_connections(config::db_max_connections())
            .connect_lazy_with(options);

        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl WeatherStore for MySqlWeatherStore {
    async fn fetch_city_weather(&self, table_name: &str) -> Result<RecordSet, DataAccessError> {
        let sql = format!("SELECT * FROM {table_name} ORDER BY date_time ASC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows_to_record_set(&rows)
    }

    async fn fetch_monthly_summary(&self) -> Result<RecordSet, DataAccessError> {
        let rows =
            sqlx::query("SELECT * FROM dm_monthly_summary ORDER BY month_sk ASC, location_key ASC")
                .fetch_all(&self.pool)
                .await?;
        rows_to_record_set(&rows)
    }

    async fn ping(&self) -> Result<(), DataAccessError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Converts driver rows into an ordered, display-ready [`RecordSet`].
fn rows_to_record_set(rows: &[MySqlRow]) -> Result<RecordSet, DataAccessError> {
    let columns = match rows.first() {
        Some(row) => row.columns().iter().map(|c| c.name().to_string()).collect(),
        None => Vec::new(),
    };

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(row.columns().len());
        for (idx, column) in row.columns().iter().enumerate() {
            cells.push(decode_cell(row, idx, column.type_info().name())?);
        }
        out.push(cells);
    }

    Ok(RecordSet::new(columns, out))
}

/// Formats a single cell by driver type name. NULL renders as an empty cell.
fn decode_cell(row: &MySqlRow, idx: usize, type_name: &str) -> Result<String, DataAccessError> {
    let cell = match type_name {
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            row.try_get::<Option<i64>, _>(idx)?.map(|v| v.to_string())
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => row.try_get::<Option<u64>, _>(idx)?.map(|v| v.to_string()),
        "FLOAT" => row.try_get::<Option<f32>, _>(idx)?.map(|v| v.to_string()),
        "DOUBLE" => row.try_get::<Option<f64>, _>(idx)?.map(|v| v.to_string()),
        "BOOLEAN" => row.try_get::<Option<bool>, _>(idx)?.map(|v| v.to_string()),
        "DATETIME" => row
            .try_get::<Option<NaiveDateTime>, _>(idx)?
            .map(|v| v.format("%Y-%m-%d %H:%M:%S").to_string()),
        "TIMESTAMP" => row
            .try_get::<Option<DateTime<Utc>>, _>(idx)?
            .map(|v| v.format("%Y-%m-%d %H:%M:%S").to_string()),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(idx)?
            .map(|v| v.to_string()),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(idx)?
            .map(|v| v.to_string()),
        _ => row.try_get::<Option<String>, _>(idx)?,
    };
    Ok(cell.unwrap_or_default())
}

pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::weather_store::{DataAccessError, MySqlWeatherStore, WeatherStore};
pub use domain::location::LocationEntry;
pub use domain::record::RecordSet;

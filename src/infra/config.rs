//! Centralized configuration (environment variables + defaults).

/// Database host (required).
pub fn db_host() -> String {
    std::env::var("DB_HOST").expect("DB_HOST must be set")
}

/// Database user (required).
pub fn db_user() -> String {
    std::env::var("DB_USER").expect("DB_USER must be set")
}

/// Database password (required).
pub fn db_password() -> String {
    std::env::var("DB_PASSWORD").expect("DB_PASSWORD must be set")
}

/// Schema holding the data-mart tables (required).
pub fn db_name() -> String {
    std::env::var("DB_NAME").expect("DB_NAME must be set")
}

/// Database port (defaults to the standard MySQL port).
pub fn db_port() -> u16 {
    parse_or("DB_PORT", 3306)
}

/// Upper bound on live pooled connections.
pub fn db_max_connections() -> u32 {
    parse_or("DB_MAX_CONNECTIONS", 10)
}

/// HTTP listening port.
pub fn listen_port() -> u16 {
    parse_or("PORT", 3000)
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(v) => v
            .parse::<T>()
            .unwrap_or_else(|_| panic!("{key} must be a valid number, got {v:?}")),
        Err(_) => default,
    }
}

//! Database Connection Management
//!
//! Utilities for creating and managing database connections.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use super::config::DatabaseConfig;

/// Build connection options from configuration
///
/// TLS is mandatory: the server certificate must chain to a trusted root and
/// match the configured host.
#[must_use]
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(config.password.expose_secret())
        .database(&config.name)
        .ssl_mode(PgSslMode::VerifyFull);

    match &config.ssl_root_cert {
        Some(path) => options.ssl_root_cert(path),
        None => options,
    }
}

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns a `sqlx::Error` if the first connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(connect_options(config))
        .await
}

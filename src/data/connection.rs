use std::{str::FromStr, time::Duration};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

/// Creates the connection pool every service operation acquires its connection from.
///
/// In-memory databases live as long as their connection, so their connections never expire.
#[tracing::instrument(skip_all)]
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::debug!(max_connections = config.max_connections, "Connecting to database");

    let options =
        SqliteConnectOptions::from_str(&config.connection_string)?.create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

    if config.is_in_memory() {
        pool_options = pool_options.idle_timeout(None::<Duration>).max_lifetime(None::<Duration>);
    }

    pool_options.connect_with(options).await
}

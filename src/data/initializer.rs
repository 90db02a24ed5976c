use sqlx::SqlitePool;

const CREATE_BOOKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Books(
    Isbn TEXT PRIMARY KEY,
    Title TEXT NOT NULL,
    Author TEXT NOT NULL,
    ShortDescription TEXT NOT NULL,
    PageCount INTEGER,
    ReleaseDate TEXT NOT NULL
)"#;

/// Creates the `Books` table if it does not exist yet.
pub struct DatabaseInitializer {
    pool: SqlitePool,
}

impl DatabaseInitializer {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip_all)]
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        let mut connection = self.pool.acquire().await?;

        sqlx::query(CREATE_BOOKS_TABLE)
            .execute(&mut *connection)
            .await?;

        tracing::info!("Database initialized");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::DatabaseConfig, data::connection::connect};

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let pool = connect(&DatabaseConfig::new("sqlite::memory:", 1))
            .await
            .expect("Failed to connect");

        let initializer = DatabaseInitializer::new(pool.clone());

        initializer.initialize().await.expect("First initialization failed");
        initializer.initialize().await.expect("Second initialization failed");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM Books")
            .fetch_one(&pool)
            .await
            .expect("Books table is missing");

        assert_eq!(count, 0);
    }
}

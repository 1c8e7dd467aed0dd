use std::{error::Error, str::FromStr};

use log::debug;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    SqlitePool,
};

const SCHEMA_QUERY: &str = "CREATE TABLE IF NOT EXISTS bmi_calculations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    gender TEXT NOT NULL,
    height REAL NOT NULL,
    weight REAL NOT NULL,
    bmi REAL NOT NULL,
    category TEXT NOT NULL,
    timestamp INTEGER NOT NULL
)";

#[derive(Clone)]
pub struct Connection {
    pool: SqlitePool,
}

impl Connection {
    pub async fn establish(database_url: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        Self::with_pool(pool).await
    }

    /// Private in-memory database. A single pooled connection keeps every
    /// query on the same database.
    pub async fn in_memory() -> Result<Self, Box<dyn Error + Send + Sync>> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, Box<dyn Error + Send + Sync>> {
        debug!("Creating schema");
        sqlx::query(SCHEMA_QUERY).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use bmiadvisor_model::{advisor, measurement::Gender};
    use chrono::{TimeZone, Utc};

    use crate::calculation::{Calculation, CalculationRepository, CalculationRepositoryImpl};

    use super::*;

    #[tokio::test]
    async fn establish_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calculations.db");
        assert!(!path.exists());

        let conn = Connection::establish(&format!("sqlite://{}", path.display()))
            .await
            .unwrap();

        assert!(path.exists());
        let journal_mode: String = sqlx::query_scalar("PRAGMA journal_mode")
            .fetch_one(conn.pool())
            .await
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");
        let synchronous: i64 = sqlx::query_scalar("PRAGMA synchronous")
            .fetch_one(conn.pool())
            .await
            .unwrap();
        assert_eq!(synchronous, 1);

        let repository = CalculationRepositoryImpl::new(conn);
        let advice = advisor::advise(Gender::Male, 175.0, 95.0).unwrap();
        let calculation =
            Calculation::from_advice(&advice, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        repository
            .store_calculation(calculation.clone())
            .await
            .unwrap();
        assert_eq!(
            repository.fetch_calculations(10).await.unwrap(),
            vec![calculation]
        );
    }

    #[tokio::test]
    async fn establish_keeps_existing_calculations() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("calculations.db").display());
        let advice = advisor::advise(Gender::Female, 162.0, 60.0).unwrap();
        let calculation =
            Calculation::from_advice(&advice, Utc.timestamp_opt(1_700_000_000, 0).unwrap());

        let first = CalculationRepositoryImpl::new(Connection::establish(&url).await.unwrap());
        first.store_calculation(calculation.clone()).await.unwrap();
        let second = CalculationRepositoryImpl::new(Connection::establish(&url).await.unwrap());

        assert_eq!(
            second.fetch_calculations(10).await.unwrap(),
            vec![calculation]
        );
    }
}

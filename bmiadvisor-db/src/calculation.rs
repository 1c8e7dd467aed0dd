use std::{error::Error, str::FromStr};

use async_trait::async_trait;
use bmiadvisor_model::{advisor::Advice, category::Category, measurement::Gender};
use chrono::{DateTime, Utc};
use log::debug;
use sqlx::Row;

use super::connection::Connection;

type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// One logged BMI calculation. Timestamps are kept with second precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    pub fn from_advice(advice: &Advice, timestamp: DateTime<Utc>) -> Self {
        Self {
            gender: advice.measurement.gender,
            height: advice.measurement.height_cm,
            weight: advice.measurement.weight_kg,
            bmi: advice.bmi,
            category: advice.category,
            timestamp,
        }
    }
}

#[mockall::automock]
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    async fn store_calculation(&self, calculation: Calculation) -> Result<()>;
    async fn fetch_calculations(&self, limit: u32) -> Result<Vec<Calculation>>;
}

#[derive(Clone)]
pub struct CalculationRepositoryImpl {
    connection: Connection,
}

impl CalculationRepositoryImpl {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl CalculationRepository for CalculationRepositoryImpl {
    async fn store_calculation(&self, calculation: Calculation) -> Result<()> {
        let mut tx = self.connection.pool().begin().await?;

        debug!("Storing calculation");
        sqlx::query(
            "INSERT INTO bmi_calculations (gender, height, weight, bmi, category, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(calculation.gender.to_string())
        .bind(calculation.height)
        .bind(calculation.weight)
        .bind(calculation.bmi)
        .bind(calculation.category.to_string())
        .bind(calculation.timestamp.timestamp())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn fetch_calculations(&self, limit: u32) -> Result<Vec<Calculation>> {
        debug!("Fetching up to {} calculations", limit);
        let rows = sqlx::query(
            "SELECT gender, height, weight, bmi, category, timestamp
            FROM bmi_calculations
            ORDER BY timestamp DESC, id DESC
            LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.connection.pool())
        .await?;

        rows.into_iter()
            .map(|row| -> Result<Calculation> {
                let timestamp: i64 = row.try_get("timestamp")?;
                Ok(Calculation {
                    gender: Gender::from_str(row.try_get("gender")?)?,
                    height: row.try_get("height")?,
                    weight: row.try_get("weight")?,
                    bmi: row.try_get("bmi")?,
                    category: Category::from_str(row.try_get("category")?)?,
                    timestamp: DateTime::from_timestamp(timestamp, 0)
                        .ok_or("Invalid timestamp")?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use bmiadvisor_model::advisor;
    use chrono::TimeZone;

    use super::*;

    async fn repository() -> CalculationRepositoryImpl {
        CalculationRepositoryImpl::new(Connection::in_memory().await.unwrap())
    }

    fn calculation(seconds: i64, gender: Gender, height: f64, weight: f64) -> Calculation {
        let advice = advisor::advise(gender, height, weight).unwrap();
        Calculation::from_advice(&advice, Utc.timestamp_opt(seconds, 0).unwrap())
    }

    #[tokio::test]
    async fn stored_calculation_can_be_read_back() {
        let repository = repository().await;
        let expected = calculation(1_700_000_000, Gender::Female, 162.0, 60.0);

        repository
            .store_calculation(expected.clone())
            .await
            .unwrap();

        assert_eq!(
            repository.fetch_calculations(10).await.unwrap(),
            vec![expected]
        );
    }

    #[tokio::test]
    async fn calculations_are_returned_newest_first() {
        let repository = repository().await;
        let older = calculation(1_700_000_000, Gender::Female, 162.0, 60.0);
        let newer = calculation(1_700_000_600, Gender::Male, 175.0, 95.0);

        repository.store_calculation(older.clone()).await.unwrap();
        repository.store_calculation(newer.clone()).await.unwrap();

        assert_eq!(
            repository.fetch_calculations(10).await.unwrap(),
            vec![newer.clone(), older]
        );
        assert_eq!(repository.fetch_calculations(1).await.unwrap(), vec![newer]);
    }

    #[tokio::test]
    async fn empty_log_returns_no_calculations() {
        let repository = repository().await;
        assert!(repository.fetch_calculations(10).await.unwrap().is_empty());
    }
}

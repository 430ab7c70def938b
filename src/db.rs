use async_trait::async_trait;
use sqlx::QueryBuilder;

use crate::ingest::BatchSink;
use crate::model::{NewTrip, Zone};

#[derive(Clone)]
pub struct Database {
    pub pool: sqlx::PgPool,
}

impl Database {
    pub async fn connect(pg_url: &str) -> anyhow::Result<Self> {
        let pool = sqlx::PgPool::connect(pg_url).await?;

        Ok(Database { pool })
    }
}

#[async_trait]
impl BatchSink<Zone> for Database {
    async fn count(&self) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM zone")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert_batch(&self, records: &[Zone]) -> anyhow::Result<()> {
        let mut query =
            QueryBuilder::new("INSERT INTO zone (location_id, borough, zone_name, service_zone) ");

        query.push_values(records, |mut row, zone| {
            row.push_bind(zone.location_id)
                .push_bind(&zone.borough)
                .push_bind(&zone.zone_name)
                .push_bind(&zone.service_zone);
        });

        query.build().execute(&self.pool).await?;

        Ok(())
    }
}

#[async_trait]
impl BatchSink<NewTrip> for Database {
    async fn count(&self) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM trip")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert_batch(&self, records: &[NewTrip]) -> anyhow::Result<()> {
        let mut query = QueryBuilder::new(
            "INSERT INTO trip (pickup_date_time, dropoff_date_time, pickup_location_id, dropoff_location_id) ",
        );

        query.push_values(records, |mut row, trip| {
            row.push_bind(trip.pickup_date_time)
                .push_bind(trip.dropoff_date_time)
                .push_bind(trip.pickup_location_id)
                .push_bind(trip.dropoff_location_id);
        });

        query.build().execute(&self.pool).await?;

        Ok(())
    }
}

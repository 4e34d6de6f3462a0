use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, Executor, Pool, Postgres};
use uuid::Uuid;

use super::{LocalStore, RideStore};
use crate::entities::PendingOrder;
use crate::error::Error;

/// Postgres-backed ride store and local key/value state.
#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    #[tracing::instrument(name = "PgStore::new", skip(db_uri))]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        pool.execute("CREATE TABLE IF NOT EXISTS rides (id UUID PRIMARY KEY, type VARCHAR NOT NULL, status VARCHAR NOT NULL, data JSONB NOT NULL, created_at TIMESTAMPTZ NOT NULL)")
            .await?;
        pool.execute(
            "CREATE TABLE IF NOT EXISTS local_state (key VARCHAR PRIMARY KEY, value VARCHAR NOT NULL)",
        )
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl RideStore for PgStore {
    #[tracing::instrument(skip(self, order), fields(kind = order.kind()))]
    async fn create_ride(&self, order: &PendingOrder) -> Result<String, Error> {
        let id = Uuid::new_v4();

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO rides (id, type, status, data, created_at) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&id)
            .bind(order.kind())
            .bind(order.status().name())
            .bind(Json(order))
            .bind(order.created_at()),
        )
        .await?;

        tracing::info!("stored {} order {}", order.kind(), id);

        Ok(id.to_string())
    }
}

#[async_trait]
impl LocalStore for PgStore {
    #[tracing::instrument(skip(self))]
    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO local_state (key, value) VALUES ($1, $2) ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
            )
            .bind(key)
            .bind(value),
        )
        .await?;

        Ok(())
    }
}

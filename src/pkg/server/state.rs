use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::{postgres::PgPoolOptions, PgPool, Pool, Postgres, Transaction};

use crate::pkg::internal::storage;
use crate::{conf::settings, prelude::Result};

pub fn db_pool() -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>>;
}

impl GetTxn for PgPool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub s3_client: Arc<S3Client>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let s3_client = storage::build_client().await;
        if let Err(err) = storage::ensure_bucket(&s3_client, &settings.s3_bucket_name).await {
            tracing::warn!("bucket check failed, uploads may not work: {}", err);
        }
        Ok(AppState {
            db_pool: Arc::new(db_pool()?),
            s3_client: Arc::new(s3_client),
        })
    }
}

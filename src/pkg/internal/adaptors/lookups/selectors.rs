use sqlx::PgConnection;

use crate::pkg::internal::adaptors::lookups::spec::{DegreeEntry, TipoFormacionEntry};
use crate::prelude::Result;

pub struct LookupSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> LookupSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        LookupSelector { pool }
    }

    pub async fn get_degrees(&mut self) -> Result<Vec<DegreeEntry>> {
        let rows = sqlx::query_as::<_, DegreeEntry>(
            "SELECT id, name, image_url, disabled FROM degrees WHERE NOT disabled ORDER BY name",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_tipos_formaciones(&mut self) -> Result<Vec<TipoFormacionEntry>> {
        let rows = sqlx::query_as::<_, TipoFormacionEntry>(
            "SELECT id, name FROM tipos_formaciones ORDER BY name",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}

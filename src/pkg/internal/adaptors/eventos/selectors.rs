use sqlx::PgConnection;

use crate::pkg::internal::adaptors::eventos::spec::EventoEntry;
use crate::prelude::Result;

pub struct EventoSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EventoSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EventoSelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<EventoEntry>> {
        let rows = sqlx::query_as::<_, EventoEntry>(
            "SELECT id, name, fecha, created_at FROM eventos ORDER BY fecha",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}

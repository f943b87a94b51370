use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use crate::pkg::internal::adaptors::eventos::spec::EventoEntry;
use crate::prelude::Result;

pub struct EventoMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EventoMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EventoMutator { pool }
    }

    pub async fn create(&mut self, name: &str, fecha: DateTime<Utc>) -> Result<EventoEntry> {
        let row = sqlx::query_as::<_, EventoEntry>(
            r#"
            INSERT INTO eventos (name, fecha)
            VALUES ($1, $2)
            RETURNING id, name, fecha, created_at
            "#,
        )
        .bind(name)
        .bind(fecha)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &mut self,
        id: i32,
        name: &str,
        fecha: DateTime<Utc>,
    ) -> Result<Option<EventoEntry>> {
        let row = sqlx::query_as::<_, EventoEntry>(
            r#"
            UPDATE eventos
            SET name = $2, fecha = $3
            WHERE id = $1
            RETURNING id, name, fecha, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(fecha)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM eventos WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

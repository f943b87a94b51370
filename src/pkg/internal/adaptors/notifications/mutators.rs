use sqlx::PgConnection;

use crate::pkg::internal::adaptors::notifications::spec::NotificationEntry;
use crate::prelude::Result;

pub struct NotificationMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> NotificationMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        NotificationMutator { pool }
    }

    pub async fn create(&mut self, content: &str, kind: &str) -> Result<NotificationEntry> {
        let row = sqlx::query_as::<_, NotificationEntry>(
            r#"
            INSERT INTO notifications (content, kind)
            VALUES ($1, $2)
            RETURNING id, content, kind, created_at
            "#,
        )
        .bind(content)
        .bind(kind)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    /// Idempotent: marking an already-read notification is a no-op.
    pub async fn mark_read(&mut self, dni: &str, ids: &[i32]) -> Result<()> {
        for id in ids {
            sqlx::query(
                r#"
                INSERT INTO notification_reads (dni, notification_id)
                VALUES ($1, $2)
                ON CONFLICT (dni, notification_id) DO NOTHING
                "#,
            )
            .bind(dni)
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        }
        Ok(())
    }
}

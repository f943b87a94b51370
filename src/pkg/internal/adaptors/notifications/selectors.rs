use std::collections::HashSet;

use sqlx::PgConnection;

use crate::pkg::internal::adaptors::notifications::spec::NotificationEntry;
use crate::prelude::Result;

pub struct NotificationSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> NotificationSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        NotificationSelector { pool }
    }

    /// The feed only reaches back three months; anything older is gone for
    /// every user regardless of read state.
    pub async fn get_recent(&mut self) -> Result<Vec<NotificationEntry>> {
        let rows = sqlx::query_as::<_, NotificationEntry>(
            r#"
            SELECT id, content, kind, created_at
            FROM notifications
            WHERE created_at >= now() - interval '3 months'
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_read_ids(&mut self, dni: &str) -> Result<HashSet<i32>> {
        let ids: Vec<i32> = sqlx::query_scalar(
            "SELECT notification_id FROM notification_reads WHERE dni = $1",
        )
        .bind(dni)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(ids.into_iter().collect())
    }
}

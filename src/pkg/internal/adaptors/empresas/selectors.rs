use sqlx::PgConnection;

use crate::pkg::internal::adaptors::empresas::spec::{EmpresaEntry, EmpresaWithPlazas};
use crate::prelude::Result;

pub struct EmpresaSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmpresaSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmpresaSelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<EmpresaWithPlazas>> {
        let rows = sqlx::query_as::<_, EmpresaWithPlazas>(
            r#"
            SELECT e.id, e.name, e.image_url, e.color_rgb, e.text_color, e.url, e.created_at,
                   COUNT(t.id) AS plazas
            FROM empresas e
            LEFT JOIN trabajos t ON t.empresa_id = e.id
            GROUP BY e.id
            ORDER BY e.name
            "#,
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<EmpresaEntry>> {
        let row = sqlx::query_as::<_, EmpresaEntry>(
            "SELECT id, name, image_url, color_rgb, text_color, url, created_at
             FROM empresas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}

use sqlx::PgConnection;

use crate::pkg::internal::adaptors::trabajos::spec::TrabajoWithRefs;
use crate::prelude::Result;

pub struct TrabajoSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> TrabajoSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        TrabajoSelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<TrabajoWithRefs>> {
        let rows = sqlx::query_as::<_, TrabajoWithRefs>(
            r#"
            SELECT t.id, t.puesto, t.degree_id, t.empresa_id, t.salario, t.ubicacion,
                   t.tipo_oferta, t.jornada, t.contrato, t.experiencia_laboral, t.idiomas,
                   t.description, t.created_at,
                   d.name AS degree_name, e.name AS empresa_name, e.image_url AS empresa_image
            FROM trabajos t
            JOIN degrees d ON d.id = t.degree_id
            JOIN empresas e ON e.id = t.empresa_id
            ORDER BY t.created_at DESC
            "#,
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<TrabajoWithRefs>> {
        let row = sqlx::query_as::<_, TrabajoWithRefs>(
            r#"
            SELECT t.id, t.puesto, t.degree_id, t.empresa_id, t.salario, t.ubicacion,
                   t.tipo_oferta, t.jornada, t.contrato, t.experiencia_laboral, t.idiomas,
                   t.description, t.created_at,
                   d.name AS degree_name, e.name AS empresa_name, e.image_url AS empresa_image
            FROM trabajos t
            JOIN degrees d ON d.id = t.degree_id
            JOIN empresas e ON e.id = t.empresa_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}

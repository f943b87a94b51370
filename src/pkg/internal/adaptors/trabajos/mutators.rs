use sqlx::PgConnection;

use crate::pkg::internal::adaptors::trabajos::spec::TrabajoEntry;
use crate::pkg::server::handlers::trabajos::SaveTrabajoInput;
use crate::prelude::Result;

const RETURNING: &str = "RETURNING id, puesto, degree_id, empresa_id, salario, ubicacion, \
                         tipo_oferta, jornada, contrato, experiencia_laboral, idiomas, \
                         description, created_at";

pub struct TrabajoMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> TrabajoMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        TrabajoMutator { pool }
    }

    pub async fn create(&mut self, trabajo: &SaveTrabajoInput) -> Result<TrabajoEntry> {
        let query = format!(
            r#"
            INSERT INTO trabajos (puesto, degree_id, empresa_id, salario, ubicacion,
                                  tipo_oferta, jornada, contrato, experiencia_laboral,
                                  idiomas, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            {}
            "#,
            RETURNING
        );
        let row = sqlx::query_as::<_, TrabajoEntry>(&query)
            .bind(&trabajo.puesto)
            .bind(trabajo.degree_id)
            .bind(trabajo.empresa_id)
            .bind(&trabajo.salario)
            .bind(&trabajo.ubicacion)
            .bind(&trabajo.tipo_oferta)
            .bind(&trabajo.jornada)
            .bind(&trabajo.contrato)
            .bind(&trabajo.experiencia_laboral)
            .bind(&trabajo.idiomas)
            .bind(&trabajo.description)
            .fetch_one(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: i32, trabajo: &SaveTrabajoInput) -> Result<Option<TrabajoEntry>> {
        let query = format!(
            r#"
            UPDATE trabajos
            SET puesto = $2, degree_id = $3, empresa_id = $4, salario = $5, ubicacion = $6,
                tipo_oferta = $7, jornada = $8, contrato = $9, experiencia_laboral = $10,
                idiomas = $11, description = $12
            WHERE id = $1
            {}
            "#,
            RETURNING
        );
        let row = sqlx::query_as::<_, TrabajoEntry>(&query)
            .bind(id)
            .bind(&trabajo.puesto)
            .bind(trabajo.degree_id)
            .bind(trabajo.empresa_id)
            .bind(&trabajo.salario)
            .bind(&trabajo.ubicacion)
            .bind(&trabajo.tipo_oferta)
            .bind(&trabajo.jornada)
            .bind(&trabajo.contrato)
            .bind(&trabajo.experiencia_laboral)
            .bind(&trabajo.idiomas)
            .bind(&trabajo.description)
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM trabajos WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use crate::pkg::internal::adaptors::formaciones::spec::FormacionEntry;
use crate::pkg::server::handlers::formaciones::SaveFormacionInput;
use crate::prelude::Result;

const RETURNING: &str = "RETURNING id, degree_id, id_tipo, name, descripcion, modalidad, \
                         lugar, capacidad, duracion, fecha, institucion, facultad, \
                         instructor, url, created_at";

pub struct FormacionMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> FormacionMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        FormacionMutator { pool }
    }

    pub async fn create(
        &mut self,
        formacion: &SaveFormacionInput,
        fecha: DateTime<Utc>,
    ) -> Result<FormacionEntry> {
        let query = format!(
            r#"
            INSERT INTO formaciones (degree_id, id_tipo, name, descripcion, modalidad, lugar,
                                     capacidad, duracion, fecha, institucion, facultad,
                                     instructor, url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            {}
            "#,
            RETURNING
        );
        let row = sqlx::query_as::<_, FormacionEntry>(&query)
            .bind(formacion.degree_id)
            .bind(formacion.id_tipo)
            .bind(&formacion.name)
            .bind(&formacion.descripcion)
            .bind(&formacion.modalidad)
            .bind(&formacion.lugar)
            .bind(formacion.capacidad)
            .bind(&formacion.duracion)
            .bind(fecha)
            .bind(&formacion.institucion)
            .bind(&formacion.facultad)
            .bind(&formacion.instructor)
            .bind(&formacion.url)
            .fetch_one(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn update(
        &mut self,
        id: i32,
        formacion: &SaveFormacionInput,
        fecha: DateTime<Utc>,
    ) -> Result<Option<FormacionEntry>> {
        let query = format!(
            r#"
            UPDATE formaciones
            SET degree_id = $2, id_tipo = $3, name = $4, descripcion = $5, modalidad = $6,
                lugar = $7, capacidad = $8, duracion = $9, fecha = $10, institucion = $11,
                facultad = $12, instructor = $13, url = $14
            WHERE id = $1
            {}
            "#,
            RETURNING
        );
        let row = sqlx::query_as::<_, FormacionEntry>(&query)
            .bind(id)
            .bind(formacion.degree_id)
            .bind(formacion.id_tipo)
            .bind(&formacion.name)
            .bind(&formacion.descripcion)
            .bind(&formacion.modalidad)
            .bind(&formacion.lugar)
            .bind(formacion.capacidad)
            .bind(&formacion.duracion)
            .bind(fecha)
            .bind(&formacion.institucion)
            .bind(&formacion.facultad)
            .bind(&formacion.instructor)
            .bind(&formacion.url)
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM formaciones WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

use sqlx::PgConnection;

use crate::pkg::internal::adaptors::formaciones::spec::FormacionWithRefs;
use crate::prelude::Result;

pub struct FormacionSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> FormacionSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        FormacionSelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<FormacionWithRefs>> {
        let rows = sqlx::query_as::<_, FormacionWithRefs>(
            r#"
            SELECT f.id, f.degree_id, f.id_tipo, f.name, f.descripcion, f.modalidad,
                   f.lugar, f.capacidad, f.duracion, f.fecha, f.institucion, f.facultad,
                   f.instructor, f.url, f.created_at,
                   d.name AS degree_name, tf.name AS tipo_name
            FROM formaciones f
            JOIN degrees d ON d.id = f.degree_id
            JOIN tipos_formaciones tf ON tf.id = f.id_tipo
            ORDER BY f.fecha DESC
            "#,
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}

use sqlx::PgConnection;

use crate::pkg::internal::adaptors::empresas::spec::EmpresaEntry;
use crate::pkg::server::handlers::empresas::SaveEmpresaInput;
use crate::prelude::Result;

pub struct EmpresaMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmpresaMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmpresaMutator { pool }
    }

    pub async fn create(&mut self, empresa: &SaveEmpresaInput) -> Result<EmpresaEntry> {
        let row = sqlx::query_as::<_, EmpresaEntry>(
            r#"
            INSERT INTO empresas (name, image_url, color_rgb, text_color, url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, image_url, color_rgb, text_color, url, created_at
            "#,
        )
        .bind(&empresa.name)
        .bind(&empresa.image_url)
        .bind(&empresa.color_rgb)
        .bind(&empresa.text_color)
        .bind(&empresa.url)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: i32, empresa: &SaveEmpresaInput) -> Result<Option<EmpresaEntry>> {
        let row = sqlx::query_as::<_, EmpresaEntry>(
            r#"
            UPDATE empresas
            SET name = $2, image_url = $3, color_rgb = $4, text_color = $5, url = $6
            WHERE id = $1
            RETURNING id, name, image_url, color_rgb, text_color, url, created_at
            "#,
        )
        .bind(id)
        .bind(&empresa.name)
        .bind(&empresa.image_url)
        .bind(&empresa.color_rgb)
        .bind(&empresa.text_color)
        .bind(&empresa.url)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM empresas WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

use sqlx::PgConnection;

use crate::pkg::internal::adaptors::users::spec::{UserEntry, UserPage, USER_COLUMNS};
use crate::prelude::Result;

pub struct UserSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> UserSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        UserSelector { pool }
    }

    pub async fn get_page(
        &mut self,
        page: i64,
        per_page: i64,
        dni: Option<&str>,
    ) -> Result<UserPage> {
        let page = page.max(1);
        let per_page = per_page.clamp(1, 100);
        let offset = (page - 1) * per_page;
        let (total, users) = match dni {
            Some(dni) => {
                let pattern = format!("%{}%", dni);
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE dni ILIKE $1")
                    .bind(&pattern)
                    .fetch_one(&mut *self.pool)
                    .await?;
                let query = format!(
                    "SELECT {} FROM users WHERE dni ILIKE $1 ORDER BY last_names, names LIMIT $2 OFFSET $3",
                    USER_COLUMNS
                );
                let users = sqlx::query_as::<_, UserEntry>(&query)
                    .bind(&pattern)
                    .bind(per_page)
                    .bind(offset)
                    .fetch_all(&mut *self.pool)
                    .await?;
                (total, users)
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                    .fetch_one(&mut *self.pool)
                    .await?;
                let query = format!(
                    "SELECT {} FROM users ORDER BY last_names, names LIMIT $1 OFFSET $2",
                    USER_COLUMNS
                );
                let users = sqlx::query_as::<_, UserEntry>(&query)
                    .bind(per_page)
                    .bind(offset)
                    .fetch_all(&mut *self.pool)
                    .await?;
                (total, users)
            }
        };
        Ok(UserPage {
            users,
            total,
            page,
            per_page,
        })
    }

    pub async fn get_by_dni(&mut self, dni: &str) -> Result<Option<UserEntry>> {
        let query = format!("SELECT {} FROM users WHERE dni = $1", USER_COLUMNS);
        let row = sqlx::query_as::<_, UserEntry>(&query)
            .bind(dni)
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<UserEntry>> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        let row = sqlx::query_as::<_, UserEntry>(&query)
            .bind(email)
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }
}

use sqlx::PgConnection;

use crate::pkg::internal::adaptors::users::spec::{UserEntry, USER_COLUMNS};
use crate::pkg::server::handlers::profile::ProfileUpdateInput;
use crate::prelude::Result;

pub struct UserMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> UserMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        UserMutator { pool }
    }

    /// The avatar column is only touched when an upload produced a new URL,
    /// so a profile save without a picture keeps the existing one.
    pub async fn update_profile(
        &mut self,
        dni: &str,
        input: &ProfileUpdateInput,
        avatar_url: Option<&str>,
    ) -> Result<Option<UserEntry>> {
        let mut query = String::from(
            "UPDATE users SET names = $2, last_names = $3, email = $4, phone = $5, \
             address = $6, birthdate = $7, degree_id = $8",
        );
        if avatar_url.is_some() {
            query.push_str(", avatar_url = $9");
        }
        query.push_str(&format!(" WHERE dni = $1 RETURNING {}", USER_COLUMNS));

        let mut q = sqlx::query_as::<_, UserEntry>(&query)
            .bind(dni)
            .bind(&input.names)
            .bind(&input.last_names)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(input.birthdate)
            .bind(input.degree_id);
        if let Some(url) = avatar_url {
            q = q.bind(url);
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }
}

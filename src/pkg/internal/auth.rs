use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};
use sqlx::prelude::{FromRow, Type};
use sqlx::PgConnection;
use uuid::Uuid;

use crate::conf::settings;
use crate::pkg::internal::adaptors::users::spec::{UserEntry, USER_COLUMNS};
use crate::pkg::server::handlers::auth::RegisterInput;
use crate::pkg::server::state::AppState;
use crate::prelude::{AppError, Result};

#[derive(Debug, Type)]
#[sqlx(type_name = "session_status", rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Expired,
}

#[derive(FromRow, Debug)]
pub struct Session {
    pub token: Uuid,
    pub dni: String,
    pub expiry: DateTime<Utc>,
    pub status: SessionStatus,
}

impl Session {
    pub async fn issue(state: &AppState, dni: &str) -> Result<Self> {
        let expiry = Utc::now() + Duration::hours(settings.session_ttl_hours);
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (token, dni, expiry, status)
            VALUES ($1, $2, $3, 'active')
            RETURNING token, dni, expiry, status
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(dni)
        .bind(expiry)
        .fetch_one(&*state.db_pool)
        .await?;
        tracing::debug!("issued session for {}", dni);
        Ok(session)
    }

    /// Resolves a presented token to its owner, or refuses it. Expired and
    /// explicitly logged-out sessions fail the same way.
    pub async fn resolve(state: &AppState, token_str: &str) -> Result<UserEntry> {
        let token = token_str
            .parse::<Uuid>()
            .map_err(|_| AppError::Unauthorized("Sesión no válida".into()))?;
        let user = sqlx::query_as::<_, UserEntry>(
            r#"
            SELECT u.dni, u.names, u.last_names, u.email, u.phone, u.address, u.birthdate,
                   u.degree_id, u.avatar_url, u.is_admin, u.must_change_password, u.created_at
            FROM users u
            JOIN sessions s ON s.dni = u.dni
            WHERE s.token = $1 AND s.status = 'active' AND s.expiry > now()
            "#,
        )
        .bind(token)
        .fetch_optional(&*state.db_pool)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Sesión no válida".into()))?;
        Ok(user)
    }

    pub async fn expire_for(state: &AppState, dni: &str) -> Result<()> {
        sqlx::query("UPDATE sessions SET status = 'expired' WHERE dni = $1 AND status = 'active'")
            .bind(dni)
            .execute(&*state.db_pool)
            .await?;
        Ok(())
    }
}

pub async fn login(
    txn: &mut PgConnection,
    dni: &str,
    password: &str,
) -> Result<Option<UserEntry>> {
    let query = format!("SELECT {} FROM login($1, $2)", USER_COLUMNS);
    let user = sqlx::query_as::<_, UserEntry>(&query)
        .bind(dni)
        .bind(password)
        .fetch_optional(&mut *txn)
        .await?;
    Ok(user)
}

pub async fn register(txn: &mut PgConnection, input: &RegisterInput) -> Result<UserEntry> {
    let query = format!(
        "SELECT {} FROM register($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        USER_COLUMNS
    );
    let user = sqlx::query_as::<_, UserEntry>(&query)
        .bind(&input.dni)
        .bind(&input.names)
        .bind(&input.last_names)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(input.birthdate)
        .bind(input.degree_id)
        .bind(&input.password)
        .fetch_one(&mut *txn)
        .await?;
    Ok(user)
}

pub async fn change_password(
    txn: &mut PgConnection,
    dni: &str,
    old_password: &str,
    new_password: &str,
) -> Result<bool> {
    let changed: bool = sqlx::query_scalar("SELECT change_password($1, $2, $3)")
        .bind(dni)
        .bind(old_password)
        .bind(new_password)
        .fetch_one(&mut *txn)
        .await?;
    Ok(changed)
}

pub async fn update_user_password(
    txn: &mut PgConnection,
    dni: &str,
    new_password: &str,
) -> Result<bool> {
    let updated: bool = sqlx::query_scalar("SELECT update_user_password($1, $2)")
        .bind(dni)
        .bind(new_password)
        .fetch_one(&mut *txn)
        .await?;
    Ok(updated)
}

pub fn generate_temp_password(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::server::state::GetTxn;

    #[test]
    fn test_temp_password_shape() {
        let password = generate_temp_password(10);
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_temp_passwords_differ() {
        assert_ne!(generate_temp_password(12), generate_temp_password(12));
    }

    #[tokio::test]
    #[traced_test]
    #[ignore = "needs a provisioned database"]
    async fn test_session_round_trip() -> Result<()> {
        let state = AppState::new().await?;
        let mut tx = state.db_pool.begin_txn().await?;
        let user = login(&mut tx, "00000000A", "secret").await?;
        if let Some(user) = user {
            let session = Session::issue(&state, &user.dni).await?;
            let resolved = Session::resolve(&state, &session.token.to_string()).await?;
            assert_eq!(resolved.dni, user.dni);
            Session::expire_for(&state, &user.dni).await?;
            assert!(Session::resolve(&state, &session.token.to_string())
                .await
                .is_err());
        }
        Ok(())
    }
}

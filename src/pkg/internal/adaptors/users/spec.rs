use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Profile row as the API exposes it. The password hash never leaves the
/// database: no query in this crate selects it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserEntry {
    pub dni: String,
    pub names: String,
    pub last_names: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birthdate: Option<NaiveDate>,
    pub degree_id: Option<i32>,
    pub avatar_url: String,
    pub is_admin: bool,
    pub must_change_password: bool,
    pub created_at: DateTime<Utc>,
}

pub const USER_COLUMNS: &str = "dni, names, last_names, email, phone, address, birthdate, \
                                degree_id, avatar_url, is_admin, must_change_password, \
                                created_at";

#[derive(Debug, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<UserEntry>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventoEntry {
    pub id: i32,
    pub name: String,
    pub fecha: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationEntry {
    pub id: i32,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

pub const KIND_JOB: &str = "job";
pub const KIND_FORMATION: &str = "formation";
pub const KIND_EVENT: &str = "event";

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmpresaEntry {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub color_rgb: String,
    pub text_color: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Company row as the directory lists it: the base record plus the number
/// of job postings referencing it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmpresaWithPlazas {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub color_rgb: String,
    pub text_color: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub plazas: i64,
}

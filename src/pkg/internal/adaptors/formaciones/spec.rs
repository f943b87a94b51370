use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FormacionEntry {
    pub id: i32,
    pub degree_id: i32,
    pub id_tipo: i32,
    pub name: String,
    pub descripcion: String,
    pub modalidad: String,
    pub lugar: String,
    pub capacidad: i32,
    pub duracion: String,
    pub fecha: DateTime<Utc>,
    pub institucion: String,
    pub facultad: String,
    pub instructor: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FormacionWithRefs {
    pub id: i32,
    pub degree_id: i32,
    pub id_tipo: i32,
    pub name: String,
    pub descripcion: String,
    pub modalidad: String,
    pub lugar: String,
    pub capacidad: i32,
    pub duracion: String,
    pub fecha: DateTime<Utc>,
    pub institucion: String,
    pub facultad: String,
    pub instructor: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub degree_name: String,
    pub tipo_name: String,
}

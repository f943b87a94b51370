use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DegreeEntry {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TipoFormacionEntry {
    pub id: i32,
    pub name: String,
}

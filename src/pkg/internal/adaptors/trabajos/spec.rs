use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrabajoEntry {
    pub id: i32,
    pub puesto: String,
    pub degree_id: i32,
    pub empresa_id: i32,
    pub salario: Option<BigDecimal>,
    pub ubicacion: String,
    pub tipo_oferta: String,
    pub jornada: String,
    pub contrato: String,
    pub experiencia_laboral: String,
    pub idiomas: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Job posting as listed: the row expanded with the referenced degree and
/// company, the way the board renders cards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrabajoWithRefs {
    pub id: i32,
    pub puesto: String,
    pub degree_id: i32,
    pub empresa_id: i32,
    pub salario: Option<BigDecimal>,
    pub ubicacion: String,
    pub tipo_oferta: String,
    pub jornada: String,
    pub contrato: String,
    pub experiencia_laboral: String,
    pub idiomas: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub degree_name: String,
    pub empresa_name: String,
    pub empresa_image: String,
}

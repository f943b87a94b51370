use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::{
            formaciones::{
                mutators::FormacionMutator,
                selectors::FormacionSelector,
                spec::{FormacionEntry, FormacionWithRefs},
            },
            notifications::{mutators::NotificationMutator, spec::KIND_FORMATION},
        },
        server::{
            envelope::ApiResponse,
            handlers::{check_required, require_delete_id, DeleteParams, WriteAction},
            state::{AppState, GetTxn},
        },
    },
    prelude::{AppError, Result},
};

#[derive(Debug, Deserialize, Validate)]
pub struct SaveFormacionInput {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub degree_id: i32,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub id_tipo: i32,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub modalidad: String,
    #[serde(default)]
    pub lugar: String,
    #[serde(default)]
    pub capacidad: i32,
    #[serde(default)]
    pub duracion: String,
    #[serde(default)]
    #[validate(required)]
    pub fecha: Option<DateTime<Utc>>,
    #[serde(default)]
    pub institucion: String,
    #[serde(default)]
    pub facultad: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub url: String,
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FormacionWithRefs>>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let formaciones = FormacionSelector::new(&mut tx).get_all().await?;
    Ok(Json(ApiResponse::ok(formaciones)))
}

pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<SaveFormacionInput>,
) -> Result<Json<ApiResponse<FormacionEntry>>> {
    check_required(&input)?;
    let fecha = input
        .fecha
        .ok_or_else(|| AppError::Validation("La fecha es obligatoria".into()))?;
    let mut tx = state.db_pool.begin_txn().await?;
    let formacion = match WriteAction::for_id(input.id) {
        WriteAction::Insert => {
            let formacion = FormacionMutator::new(&mut tx).create(&input, fecha).await?;
            NotificationMutator::new(&mut tx)
                .create(
                    &format!("Nueva formación: {}", formacion.name),
                    KIND_FORMATION,
                )
                .await?;
            formacion
        }
        WriteAction::Update(id) => FormacionMutator::new(&mut tx)
            .update(id, &input, fecha)
            .await?
            .ok_or_else(|| AppError::NotFound("La formación no existe".into()))?,
    };
    tx.commit().await?;
    Ok(Json(ApiResponse::with_message(
        formacion,
        "Formación guardada",
    )))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<ApiResponse<()>>> {
    let id = require_delete_id(&params)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let deleted = FormacionMutator::new(&mut tx).delete(id).await?;
    tx.commit().await?;
    tracing::debug!("formacion {} deleted: {}", id, deleted);
    Ok(Json(ApiResponse::message("Formación eliminada")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> serde_json::Value {
        serde_json::json!({
            "degree_id": 1,
            "id_tipo": 2,
            "name": "Diplomado en analítica de datos",
            "descripcion": "Programa intensivo",
            "modalidad": "Virtual",
            "lugar": "Campus central",
            "capacidad": 40,
            "duracion": "120 horas",
            "fecha": "2024-06-10T18:00:00Z",
            "institucion": "Facultad de Ingeniería",
            "facultad": "Ingeniería",
            "instructor": "Dra. Pérez",
            "url": "https://alumni.example.com/formaciones/1"
        })
    }

    #[test]
    fn test_full_payload_is_valid() {
        let input: SaveFormacionInput = serde_json::from_value(full_payload()).unwrap();
        assert!(check_required(&input).is_ok());
    }

    #[test]
    fn test_each_missing_required_field_is_rejected() {
        for field in ["degree_id", "id_tipo", "name", "modalidad", "fecha"] {
            let mut payload = full_payload();
            payload.as_object_mut().unwrap().remove(field);
            let input: SaveFormacionInput = serde_json::from_value(payload).unwrap();
            assert!(check_required(&input).is_err(), "{} should be required", field);
        }
    }
}

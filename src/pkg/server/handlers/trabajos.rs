use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use sqlx::types::BigDecimal;
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::{
            notifications::{mutators::NotificationMutator, spec::KIND_JOB},
            trabajos::{
                mutators::TrabajoMutator,
                selectors::TrabajoSelector,
                spec::{TrabajoEntry, TrabajoWithRefs},
            },
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
pub struct SaveTrabajoInput {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub puesto: String,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub degree_id: i32,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub empresa_id: i32,
    #[serde(default)]
    pub salario: Option<BigDecimal>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub ubicacion: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub tipo_oferta: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub jornada: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub contrato: String,
    #[serde(default)]
    pub experiencia_laboral: String,
    #[serde(default)]
    pub idiomas: String,
    #[serde(default)]
    pub description: String,
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TrabajoWithRefs>>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let trabajos = TrabajoSelector::new(&mut tx).get_all().await?;
    Ok(Json(ApiResponse::ok(trabajos)))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TrabajoWithRefs>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let trabajo = TrabajoSelector::new(&mut tx)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("La oferta no existe".into()))?;
    Ok(Json(ApiResponse::ok(trabajo)))
}

pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<SaveTrabajoInput>,
) -> Result<Json<ApiResponse<TrabajoEntry>>> {
    check_required(&input)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let trabajo = match WriteAction::for_id(input.id) {
        WriteAction::Insert => {
            let trabajo = TrabajoMutator::new(&mut tx).create(&input).await?;
            NotificationMutator::new(&mut tx)
                .create(
                    &format!("Nueva oferta de trabajo: {}", trabajo.puesto),
                    KIND_JOB,
                )
                .await?;
            trabajo
        }
        WriteAction::Update(id) => TrabajoMutator::new(&mut tx)
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::NotFound("La oferta no existe".into()))?,
    };
    tx.commit().await?;
    Ok(Json(ApiResponse::with_message(trabajo, "Oferta guardada")))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<ApiResponse<()>>> {
    let id = require_delete_id(&params)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let deleted = TrabajoMutator::new(&mut tx).delete(id).await?;
    tx.commit().await?;
    tracing::debug!("trabajo {} deleted: {}", id, deleted);
    Ok(Json(ApiResponse::message("Oferta eliminada")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> serde_json::Value {
        serde_json::json!({
            "puesto": "Desarrollador backend",
            "degree_id": 1,
            "empresa_id": 2,
            "salario": 1500.0,
            "ubicacion": "Madrid",
            "tipo_oferta": "Indefinido",
            "jornada": "Completa",
            "contrato": "Laboral",
            "experiencia_laboral": "2 años",
            "idiomas": "Español, Inglés",
            "description": "Equipo de plataformas"
        })
    }

    #[test]
    fn test_full_payload_is_valid() {
        let input: SaveTrabajoInput = serde_json::from_value(full_payload()).unwrap();
        assert!(check_required(&input).is_ok());
    }

    #[test]
    fn test_each_missing_required_field_is_rejected() {
        for field in [
            "puesto",
            "degree_id",
            "empresa_id",
            "ubicacion",
            "tipo_oferta",
            "jornada",
            "contrato",
        ] {
            let mut payload = full_payload();
            payload.as_object_mut().unwrap().remove(field);
            let input: SaveTrabajoInput = serde_json::from_value(payload).unwrap();
            assert!(check_required(&input).is_err(), "{} should be required", field);
        }
    }

    #[test]
    fn test_salario_is_optional() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("salario");
        let input: SaveTrabajoInput = serde_json::from_value(payload).unwrap();
        assert!(check_required(&input).is_ok());
        assert!(input.salario.is_none());
    }

    #[test]
    fn test_update_branch_for_existing_id() {
        let mut payload = full_payload();
        payload
            .as_object_mut()
            .unwrap()
            .insert("id".into(), serde_json::json!(9));
        let input: SaveTrabajoInput = serde_json::from_value(payload).unwrap();
        assert_eq!(WriteAction::for_id(input.id), WriteAction::Update(9));
    }
}

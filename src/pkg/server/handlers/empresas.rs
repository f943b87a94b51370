use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::empresas::{
            mutators::EmpresaMutator,
            selectors::EmpresaSelector,
            spec::{EmpresaEntry, EmpresaWithPlazas},
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
pub struct SaveEmpresaInput {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub color_rgb: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub text_color: String,
    #[serde(default)]
    pub url: String,
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EmpresaWithPlazas>>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let empresas = EmpresaSelector::new(&mut tx).get_all().await?;
    Ok(Json(ApiResponse::ok(empresas)))
}

pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<SaveEmpresaInput>,
) -> Result<Json<ApiResponse<EmpresaEntry>>> {
    check_required(&input)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let empresa = match WriteAction::for_id(input.id) {
        WriteAction::Insert => EmpresaMutator::new(&mut tx).create(&input).await?,
        WriteAction::Update(id) => EmpresaMutator::new(&mut tx)
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::NotFound("La empresa no existe".into()))?,
    };
    tx.commit().await?;
    Ok(Json(ApiResponse::with_message(empresa, "Empresa guardada")))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<ApiResponse<()>>> {
    let id = require_delete_id(&params)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let deleted = EmpresaMutator::new(&mut tx).delete(id).await?;
    tx.commit().await?;
    tracing::debug!("empresa {} deleted: {}", id, deleted);
    Ok(Json(ApiResponse::message("Empresa eliminada")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> serde_json::Value {
        serde_json::json!({
            "name": "Acme",
            "image_url": "https://img.example.com/acme.png",
            "color_rgb": "14,116,144",
            "text_color": "white",
            "url": "https://acme.example.com"
        })
    }

    #[test]
    fn test_full_payload_is_valid() {
        let input: SaveEmpresaInput = serde_json::from_value(full_payload()).unwrap();
        assert!(check_required(&input).is_ok());
        assert_eq!(WriteAction::for_id(input.id), WriteAction::Insert);
    }

    #[test]
    fn test_each_missing_required_field_is_rejected() {
        for field in ["name", "color_rgb", "text_color"] {
            let mut payload = full_payload();
            payload.as_object_mut().unwrap().remove(field);
            let input: SaveEmpresaInput = serde_json::from_value(payload).unwrap();
            assert!(check_required(&input).is_err(), "{} should be required", field);
        }
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("image_url");
        payload.as_object_mut().unwrap().remove("url");
        let input: SaveEmpresaInput = serde_json::from_value(payload).unwrap();
        assert!(check_required(&input).is_ok());
    }
}

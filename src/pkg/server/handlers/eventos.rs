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
            eventos::{mutators::EventoMutator, selectors::EventoSelector, spec::EventoEntry},
            notifications::{mutators::NotificationMutator, spec::KIND_EVENT},
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
pub struct SaveEventoInput {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(required)]
    pub fecha: Option<DateTime<Utc>>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<EventoEntry>>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let eventos = EventoSelector::new(&mut tx).get_all().await?;
    Ok(Json(ApiResponse::ok(eventos)))
}

pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<SaveEventoInput>,
) -> Result<Json<ApiResponse<EventoEntry>>> {
    check_required(&input)?;
    let fecha = input
        .fecha
        .ok_or_else(|| AppError::Validation("La fecha es obligatoria".into()))?;
    let mut tx = state.db_pool.begin_txn().await?;
    let evento = match WriteAction::for_id(input.id) {
        WriteAction::Insert => {
            let evento = EventoMutator::new(&mut tx).create(&input.name, fecha).await?;
            NotificationMutator::new(&mut tx)
                .create(&format!("Nuevo evento: {}", evento.name), KIND_EVENT)
                .await?;
            evento
        }
        WriteAction::Update(id) => EventoMutator::new(&mut tx)
            .update(id, &input.name, fecha)
            .await?
            .ok_or_else(|| AppError::NotFound("El evento no existe".into()))?,
    };
    tx.commit().await?;
    Ok(Json(ApiResponse::with_message(evento, "Evento guardado")))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<ApiResponse<()>>> {
    let id = require_delete_id(&params)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let deleted = EventoMutator::new(&mut tx).delete(id).await?;
    tx.commit().await?;
    tracing::debug!("evento {} deleted: {}", id, deleted);
    Ok(Json(ApiResponse::message("Evento eliminado")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let valid: SaveEventoInput = serde_json::from_value(serde_json::json!({
            "name": "Feria de empleo",
            "fecha": "2024-09-01T10:00:00Z"
        }))
        .unwrap();
        assert!(check_required(&valid).is_ok());

        let no_name: SaveEventoInput =
            serde_json::from_value(serde_json::json!({ "fecha": "2024-09-01T10:00:00Z" }))
                .unwrap();
        assert!(check_required(&no_name).is_err());

        let no_fecha: SaveEventoInput =
            serde_json::from_value(serde_json::json!({ "name": "Feria" })).unwrap();
        assert!(check_required(&no_fecha).is_err());
    }
}

use axum::{extract::State, Json};

use crate::{
    pkg::{
        internal::adaptors::lookups::{
            selectors::LookupSelector,
            spec::{DegreeEntry, TipoFormacionEntry},
        },
        server::{
            envelope::ApiResponse,
            state::{AppState, GetTxn},
        },
    },
    prelude::Result,
};

pub async fn degrees(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<DegreeEntry>>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let degrees = LookupSelector::new(&mut tx).get_degrees().await?;
    Ok(Json(ApiResponse::ok(degrees)))
}

pub async fn tipos_formaciones(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TipoFormacionEntry>>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let tipos = LookupSelector::new(&mut tx).get_tipos_formaciones().await?;
    Ok(Json(ApiResponse::ok(tipos)))
}

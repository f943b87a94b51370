use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::adaptors::users::{selectors::UserSelector, spec::UserPage},
        server::{
            envelope::ApiResponse,
            state::{AppState, GetTxn},
        },
    },
    prelude::Result,
};

#[derive(Debug, Deserialize)]
pub struct UserListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub dni: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<UserListParams>,
) -> Result<Json<ApiResponse<UserPage>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let page = UserSelector::new(&mut tx)
        .get_page(
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(20),
            params.dni.as_deref().filter(|d| !d.is_empty()),
        )
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

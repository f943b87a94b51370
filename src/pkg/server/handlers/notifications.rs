use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                notifications::{mutators::NotificationMutator, selectors::NotificationSelector},
                users::spec::UserEntry,
            },
            read_state,
        },
        server::{
            envelope::ApiResponse,
            handlers::check_required,
            state::{AppState, GetTxn},
        },
    },
    prelude::Result,
};

#[derive(Debug, Serialize)]
pub struct NotificationItem {
    pub id: i32,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Serialize)]
pub struct NotificationFeed {
    pub notifications: Vec<NotificationItem>,
    pub unread: usize,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MarkReadInput {
    #[serde(default)]
    #[validate(range(min = 1))]
    pub id: i32,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
) -> Result<Json<ApiResponse<NotificationFeed>>> {
    let now = Utc::now();
    let mut tx = state.db_pool.begin_txn().await?;
    let items = NotificationSelector::new(&mut tx).get_recent().await?;
    let mut read_ids = NotificationSelector::new(&mut tx).get_read_ids(&user.dni).await?;

    // anything that aged past the cutoff gets folded into the read set now
    let summary = read_state::summarize(&items, &read_ids, now);
    if !summary.newly_stale.is_empty() {
        NotificationMutator::new(&mut tx)
            .mark_read(&user.dni, &summary.newly_stale)
            .await?;
        read_ids.extend(summary.newly_stale.iter().copied());
        tx.commit().await?;
    }

    let notifications = items
        .iter()
        .map(|n| NotificationItem {
            id: n.id,
            content: n.content.clone(),
            kind: n.kind.clone(),
            created_at: n.created_at,
            read: read_state::is_read(&items, &read_ids, n.id, now),
        })
        .collect();
    Ok(Json(ApiResponse::ok(NotificationFeed {
        notifications,
        unread: summary.unread,
    })))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Json(input): Json<MarkReadInput>,
) -> Result<Json<ApiResponse<NotificationFeed>>> {
    check_required(&input)?;
    let now = Utc::now();
    let mut tx = state.db_pool.begin_txn().await?;
    NotificationMutator::new(&mut tx)
        .mark_read(&user.dni, &[input.id])
        .await?;

    let items = NotificationSelector::new(&mut tx).get_recent().await?;
    let read_ids = NotificationSelector::new(&mut tx).get_read_ids(&user.dni).await?;
    tx.commit().await?;

    let summary = read_state::summarize(&items, &read_ids, now);
    let notifications = items
        .iter()
        .map(|n| NotificationItem {
            id: n.id,
            content: n.content.clone(),
            kind: n.kind.clone(),
            created_at: n.created_at,
            read: read_state::is_read(&items, &read_ids, n.id, now),
        })
        .collect();
    Ok(Json(ApiResponse::ok(NotificationFeed {
        notifications,
        unread: summary.unread,
    })))
}

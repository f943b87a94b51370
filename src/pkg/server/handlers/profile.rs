use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    conf::settings,
    pkg::{
        internal::{
            adaptors::users::{mutators::UserMutator, spec::UserEntry},
            avatar,
            storage::{object_url, S3Ops},
        },
        server::{
            envelope::ApiResponse,
            handlers::check_required,
            state::{AppState, GetTxn},
        },
    },
    prelude::{AppError, Result},
};

#[derive(Debug, Deserialize, Validate)]
pub struct ProfileUpdateInput {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub names: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub last_names: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub degree_id: Option<i32>,
    /// Optional `data:image/...;base64,` payload from the picture picker.
    #[serde(default)]
    pub avatar: Option<String>,
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Json(input): Json<ProfileUpdateInput>,
) -> Result<Json<ApiResponse<UserEntry>>> {
    check_required(&input)?;

    let avatar_url = match input.avatar.as_deref().filter(|a| !a.is_empty()) {
        Some(data_url) => {
            let upload = avatar::parse_data_url(data_url)?;
            let key = format!("avatars/{}.{}", &user.dni, &upload.extension);
            state
                .s3_client
                .upload_object(&settings.s3_bucket_name, &key, upload.data, &upload.mime)
                .await?;
            Some(object_url(&key))
        }
        None => None,
    };

    let mut tx = state.db_pool.begin_txn().await?;
    let updated = UserMutator::new(&mut tx)
        .update_profile(&user.dni, &input, avatar_url.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound("El perfil no existe".into()))?;
    tx.commit().await?;
    Ok(Json(ApiResponse::with_message(updated, "Perfil actualizado")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_requires_names_and_email() {
        let full: ProfileUpdateInput = serde_json::from_value(serde_json::json!({
            "names": "Ana",
            "last_names": "García",
            "email": "ana@example.com",
            "phone": "600111222"
        }))
        .unwrap();
        assert!(check_required(&full).is_ok());

        let missing: ProfileUpdateInput = serde_json::from_value(serde_json::json!({
            "last_names": "García",
            "email": "ana@example.com"
        }))
        .unwrap();
        assert!(check_required(&missing).is_err());
    }
}

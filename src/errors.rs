use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::pkg::server::envelope::ApiResponse;

/// Every failure a request can surface. Variants map onto the HTTP status
/// the route answers with; the body is always the `{isSuccess, data,
/// message}` envelope.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    MissingParam(String),

    #[error("Credenciales incorrectas")]
    InvalidCredentials,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("error de correo: {0}")]
    Mail(String),

    #[error("error de almacenamiento: {0}")]
    Storage(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MissingParam(_) | AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InvalidCredentials | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", &self);
        }
        (status, Json(ApiResponse::<()>::fail(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("faltan campos".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingParam("falta id".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("no existe".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Mail("smtp".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_credential_failure_envelope() {
        let response = AppError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["message"], "Credenciales incorrectas");
        assert!(body["data"].is_null());
    }
}

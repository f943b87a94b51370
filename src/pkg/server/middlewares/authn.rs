use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    pkg::{
        internal::{adaptors::users::spec::UserEntry, auth::Session},
        server::state::AppState,
    },
    prelude::{AppError, Result},
};

pub const SESSION_COOKIE: &str = "_Host_alumni_session";

fn presented_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| {
            headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(str::to_string)
        })
}

async fn resolve_user(state: &AppState, headers: &HeaderMap) -> Result<UserEntry> {
    match presented_token(headers) {
        Some(token) => Session::resolve(state, &token).await,
        None => {
            tracing::warn!("session token missing, authentication denied");
            Err(AppError::Unauthorized("Sesión no válida".into()))
        }
    }
}

pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let user = resolve_user(&state, &headers).await?;
    request.extensions_mut().insert(Arc::new(user));
    Ok(next.run(request).await)
}

/// Maintenance mutations are not for everyone: a valid session whose owner
/// is not flagged as admin is refused outright.
pub async fn require_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let user = resolve_user(&state, &headers).await?;
    if !user.is_admin {
        return Err(AppError::Forbidden(
            "Operación reservada a administradores".into(),
        ));
    }
    request.extensions_mut().insert(Arc::new(user));
    Ok(next.run(request).await)
}

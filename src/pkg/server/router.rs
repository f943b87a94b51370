use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;

    // browse + account entry points, no session needed
    let public = Router::new()
        .route("/api/empresas", get(handlers::empresas::list))
        .route("/api/trabajos", get(handlers::trabajos::list))
        .route("/api/trabajos/{id}", get(handlers::trabajos::retrieve))
        .route("/api/formaciones", get(handlers::formaciones::list))
        .route("/api/eventos", get(handlers::eventos::list))
        .route("/api/tipos-formaciones", get(handlers::lookups::tipos_formaciones))
        .route("/api/degrees", get(handlers::lookups::degrees))
        .route("/api/users", get(handlers::users::list))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/register", post(handlers::auth::register))
        .route("/api/forgot-password", post(handlers::auth::forgot_password))
        .route("/api/send-password-reset", post(handlers::auth::send_password_reset))
        .route("/api/contact", post(handlers::contact::send))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez));

    let session = Router::new()
        .route("/logout", post(handlers::auth::logout))
        .route("/api/change-password", post(handlers::auth::change_password))
        .route("/api/profile-maintenance", put(handlers::profile::update))
        .route("/api/notifications", get(handlers::notifications::list))
        .route("/api/notifications/read", post(handlers::notifications::mark_read))
        .layer(from_fn_with_state(state.clone(), authn::authenticate));

    let maintenance = Router::new()
        .route(
            "/api/empresas",
            post(handlers::empresas::save).delete(handlers::empresas::delete),
        )
        .route(
            "/api/trabajos",
            post(handlers::trabajos::save).delete(handlers::trabajos::delete),
        )
        .route(
            "/api/formaciones",
            post(handlers::formaciones::save).delete(handlers::formaciones::delete),
        )
        .route(
            "/api/eventos",
            post(handlers::eventos::save).delete(handlers::eventos::delete),
        )
        .layer(from_fn_with_state(state.clone(), authn::require_admin));

    let app = public
        .merge(session)
        .merge(maintenance)
        .with_state(state);

    Ok(app)
}

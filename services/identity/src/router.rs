use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use kiosk_core::health::{healthz, readyz};
use kiosk_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{login, refresh, register},
    profile::{get_profile, update_profile},
    user::{get_user, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/refresh", post(refresh))
        // User detail (self-only)
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).put(update_user),
        )
        // Profile (read any, write own)
        .route(
            "/users/{id}/profile",
            get(get_profile).patch(update_profile).put(update_profile),
        )
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

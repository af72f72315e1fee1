//! Pet adoption workflow service.
//!
//! Registering a pet, rendering the adoption description form, and saving
//! adoption status changes. Handlers return named rendering contexts; the
//! templating engine and durable store are external collaborators.

pub mod auth;
pub mod config;
pub mod csrf;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod state;
pub mod views;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::trace::TraceLayer;

/// Build application router. Workflow routes sit behind bearer
/// authentication, the USER role check, and CSRF protection; the health and
/// CSRF token endpoints stay public.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/adoption/descriptionForAdoption",
            get(handlers::adoption::description_for_adoption),
        )
        .route("/adoption/save", post(handlers::adoption::save_adoption))
        .route("/pet/save", post(handlers::pet::save_pet))
        .layer(middleware::from_fn(csrf::csrf_protect))
        .layer(middleware::from_fn(auth::require_user_role))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/csrf/token", get(csrf::issue_csrf_token))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

//! HTTP route definitions and the top-level router composition.

use axum::{Router, middleware};

use crate::state::SharedState;

/// Admin repair and bootstrap routes plus the password middleware.
pub mod admin;
/// Swagger UI and OpenAPI document routes.
pub mod docs;
/// Game schedule and live-score routes.
pub mod games;
/// Health check route.
pub mod health;
/// Rules page routes.
pub mod rules;
/// Team registry and standings routes.
pub mod teams;

/// Compose all route trees: public reads, password-gated mutations, and docs.
pub fn router(state: SharedState) -> Router<()> {
    let public_router = health::router()
        .merge(teams::public_router())
        .merge(games::public_router())
        .merge(rules::public_router());

    let admin_router = teams::admin_router()
        .merge(games::admin_router())
        .merge(rules::admin_router())
        .merge(admin::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin_password,
        ));

    let docs_router = docs::router(state.clone());

    public_router
        .merge(admin_router)
        .merge(docs_router)
        .with_state(state)
}

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
    routing::post,
};

use crate::{
    dto::admin::{ActionResponse, InitTimersResponse, SeedResponse},
    error::AppError,
    services::{admin_service, seed, standings::RecalculateOutcome},
    state::SharedState,
};

/// Header carrying the shared admin password on mutating routes.
const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Repair and bootstrap endpoints for the tournament operator.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/admin/recalculate-standings",
            post(recalculate_standings),
        )
        .route("/api/admin/init-timers", post(init_timers))
        .route("/api/admin/reset", post(reset))
        .route("/api/admin/seed", post(seed_sample_data))
}

/// Reset all team totals and replay every completed game once.
#[utoipa::path(
    post,
    path = "/api/admin/recalculate-standings",
    tag = "admin",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password")),
    responses((status = 200, description = "Standings recalculated", body = RecalculateOutcome))
)]
pub async fn recalculate_standings(
    State(state): State<SharedState>,
) -> Result<Json<RecalculateOutcome>, AppError> {
    Ok(Json(admin_service::recalculate_standings(&state).await?))
}

/// Restart clocks for games whose persisted state says they should run.
#[utoipa::path(
    post,
    path = "/api/admin/init-timers",
    tag = "admin",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password")),
    responses((status = 200, description = "Clocks reconciled", body = InitTimersResponse))
)]
pub async fn init_timers(
    State(state): State<SharedState>,
) -> Result<Json<InitTimersResponse>, AppError> {
    Ok(Json(admin_service::init_timers(&state).await?))
}

/// Wipe the whole dataset and stop every live clock.
#[utoipa::path(
    post,
    path = "/api/admin/reset",
    tag = "admin",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password")),
    responses((status = 200, description = "Store wiped", body = ActionResponse))
)]
pub async fn reset(State(state): State<SharedState>) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(admin_service::reset(&state).await?))
}

/// Seed an empty store with the sample tournament.
#[utoipa::path(
    post,
    path = "/api/admin/seed",
    tag = "admin",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password")),
    responses(
        (status = 200, description = "Sample data created", body = SeedResponse),
        (status = 409, description = "Store is not empty")
    )
)]
pub async fn seed_sample_data(
    State(state): State<SharedState>,
) -> Result<Json<SeedResponse>, AppError> {
    Ok(Json(seed::seed_sample_data(&state).await?))
}

/// Gate mutating routes behind the shared admin password.
pub async fn require_admin_password(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthorized("missing admin password header `X-Admin-Password`".into())
        })?;

    if provided == state.config().admin_password {
        Ok(next.run(req).await)
    } else {
        Err(AppError::Unauthorized("invalid admin password".into()))
    }
}

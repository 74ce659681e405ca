use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    dto::team::{CreateTeamRequest, TeamResponse, UpdateTeamRequest},
    error::AppError,
    services::team_service,
    state::SharedState,
};

/// Read-only team routes consumed by the schedule and standings views.
pub fn public_router() -> Router<SharedState> {
    Router::new()
        .route("/api/teams", get(list_teams))
        .route("/api/teams/{id}", get(get_team))
        .route("/api/standings", get(standings))
}

/// Mutating team routes, mounted behind the admin password middleware.
pub fn admin_router() -> Router<SharedState> {
    Router::new()
        .route("/api/teams", post(create_team))
        .route("/api/teams/{id}", put(update_team).delete(delete_team))
}

/// List all registered teams.
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = "teams",
    responses((status = 200, description = "All teams", body = [TeamResponse]))
)]
pub async fn list_teams(
    State(state): State<SharedState>,
) -> Result<Json<Vec<TeamResponse>>, AppError> {
    Ok(Json(team_service::list_teams(&state).await?))
}

/// Retrieve a team by its id.
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = "teams",
    params(("id" = i64, Path, description = "Identifier of the team")),
    responses(
        (status = 200, description = "Team", body = TeamResponse),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn get_team(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamResponse>, AppError> {
    Ok(Json(team_service::get_team(&state, id).await?))
}

/// Teams ranked by wins, point differential, then points scored.
#[utoipa::path(
    get,
    path = "/api/standings",
    tag = "teams",
    responses((status = 200, description = "Ranked teams", body = [TeamResponse]))
)]
pub async fn standings(
    State(state): State<SharedState>,
) -> Result<Json<Vec<TeamResponse>>, AppError> {
    Ok(Json(team_service::standings(&state).await?))
}

/// Register a new team.
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = "teams",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password")),
    request_body = CreateTeamRequest,
    responses((status = 200, description = "Team created", body = TeamResponse))
)]
pub async fn create_team(
    State(state): State<SharedState>,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<Json<TeamResponse>, AppError> {
    payload.validate()?;
    Ok(Json(team_service::create_team(&state, payload).await?))
}

/// Edit a team's display fields.
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = "teams",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password"),
    ("id" = i64, Path, description = "Identifier of the team")),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated", body = TeamResponse),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn update_team(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>, AppError> {
    payload.validate()?;
    Ok(Json(team_service::update_team(&state, id, payload).await?))
}

/// Delete a team and cascade-delete its games.
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = "teams",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password"),
    ("id" = i64, Path, description = "Identifier of the team")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn delete_team(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    team_service::delete_team(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

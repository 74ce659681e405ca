use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    dto::game::{CreateGameRequest, GameResponse, UpdateGameRequest},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Read-only game routes consumed by the schedule view.
pub fn public_router() -> Router<SharedState> {
    Router::new()
        .route("/api/games", get(list_games))
        .route("/api/games/{id}", get(get_game))
}

/// Mutating game routes, mounted behind the admin password middleware.
pub fn admin_router() -> Router<SharedState> {
    Router::new()
        .route("/api/games", post(create_game))
        .route("/api/games/{id}", put(update_game).delete(delete_game))
}

/// List all games joined with team display data.
#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    responses((status = 200, description = "All games", body = [GameResponse]))
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    Ok(Json(game_service::list_games(&state).await?))
}

/// Retrieve a game by its id.
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game", body = GameResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<GameResponse>, AppError> {
    Ok(Json(game_service::get_game(&state, id).await?))
}

/// Schedule a new game.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "games",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password")),
    request_body = CreateGameRequest,
    responses(
        (status = 200, description = "Game scheduled", body = GameResponse),
        (status = 400, description = "Unknown team or invalid payload")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<GameResponse>, AppError> {
    payload.validate()?;
    Ok(Json(game_service::create_game(&state, payload).await?))
}

/// Apply an operator edit: scores, status, clock, half, schedule.
///
/// Completions and score corrections reconcile team standings as part of
/// the same request.
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = "games",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password"),
    ("id" = i64, Path, description = "Identifier of the game")),
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Game updated", body = GameResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateGameRequest>,
) -> Result<Json<GameResponse>, AppError> {
    payload.validate()?;
    Ok(Json(game_service::update_game(&state, id, payload).await?))
}

/// Delete a game, stopping its clock.
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = "games",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password"),
    ("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    game_service::delete_game(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

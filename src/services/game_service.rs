use std::collections::HashMap;

use tracing::info;

use crate::{
    dao::models::{GameEntity, GameStatus, NewGame, TeamEntity},
    dto::game::{CreateGameRequest, GameResponse, UpdateGameRequest},
    dto::validation::parse_rfc3339,
    error::ServiceError,
    services::standings,
    state::SharedState,
};

/// List all games in schedule order, joined with team display data.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    let store = state.store();
    let games = store.list_games().await?;
    let teams = team_index(&store.list_teams().await?);
    Ok(games
        .into_iter()
        .map(|game| join_teams(game, &teams))
        .collect())
}

/// Fetch one game by id, joined with team display data.
pub async fn get_game(state: &SharedState, id: i64) -> Result<GameResponse, ServiceError> {
    let store = state.store();
    let Some(game) = store.get_game(id).await? else {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    };
    let teams = team_index(&store.list_teams().await?);
    Ok(join_teams(game, &teams))
}

/// Schedule a new game with a fresh clock and no scores.
pub async fn create_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let store = state.store();

    // Records stay typed at the boundary: a game never references a team
    // id the store does not know.
    for (label, team_id) in [
        ("home", request.home_team_id),
        ("away", request.away_team_id),
    ] {
        if store.get_team(team_id).await?.is_none() {
            return Err(ServiceError::InvalidInput(format!(
                "unknown {label} team `{team_id}`"
            )));
        }
    }

    let scheduled_at = parse_rfc3339(&request.scheduled_at)
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;

    let game = store
        .create_game(NewGame {
            home_team_id: request.home_team_id,
            away_team_id: request.away_team_id,
            scheduled_at,
            field: request.field,
            referee: request.referee,
            time_remaining: state.config().half_seconds,
        })
        .await?;
    info!(game_id = game.id, "game scheduled");

    let teams = team_index(&store.list_teams().await?);
    Ok(join_teams(game, &teams))
}

/// Apply an operator edit to a game.
///
/// Order of effects mirrors the admin flow: the clock reacts to a
/// `timer_running` change first, then team totals are reconciled against
/// the score/status delta, then the game record itself is patched.
pub async fn update_game(
    state: &SharedState,
    id: i64,
    request: UpdateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let store = state.store();
    let Some(before) = store.get_game(id).await? else {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    };

    let patch = request.into_patch()?;

    if let Some(running) = patch.timer_running {
        let status = patch.status.unwrap_or(before.status);
        if running && status == GameStatus::InProgress {
            state.clock().start_timer(id);
        } else {
            state.clock().stop_timer(id);
        }
    } else if patch.status.is_some_and(|status| status != GameStatus::InProgress) {
        // Leaving in-progress always parks the clock.
        state.clock().stop_timer(id);
    }

    standings::apply_result_delta(store.as_ref(), &before, &patch).await?;

    let Some(after) = store.update_game(id, patch).await? else {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    };

    let teams = team_index(&store.list_teams().await?);
    Ok(join_teams(after, &teams))
}

/// Delete a game, stopping its clock first so no orphaned timer remains.
pub async fn delete_game(state: &SharedState, id: i64) -> Result<(), ServiceError> {
    state.clock().stop_timer(id);
    if !state.store().delete_game(id).await? {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    }
    info!(game_id = id, "game deleted");
    Ok(())
}

fn team_index(teams: &[TeamEntity]) -> HashMap<i64, TeamEntity> {
    teams.iter().map(|team| (team.id, team.clone())).collect()
}

fn join_teams(game: GameEntity, teams: &HashMap<i64, TeamEntity>) -> GameResponse {
    let home = teams.get(&game.home_team_id);
    let away = teams.get(&game.away_team_id);
    GameResponse::joined(game, home, away)
}

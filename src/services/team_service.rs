use std::cmp::Reverse;

use tracing::info;

use crate::{
    dao::models::{NewTeam, TeamPatch},
    dto::team::{CreateTeamRequest, TeamResponse, UpdateTeamRequest},
    error::ServiceError,
    state::SharedState,
};

/// List all registered teams in creation order.
pub async fn list_teams(state: &SharedState) -> Result<Vec<TeamResponse>, ServiceError> {
    let teams = state.store().list_teams().await?;
    Ok(teams.into_iter().map(Into::into).collect())
}

/// Fetch one team by id.
pub async fn get_team(state: &SharedState, id: i64) -> Result<TeamResponse, ServiceError> {
    let Some(team) = state.store().get_team(id).await? else {
        return Err(ServiceError::NotFound(format!("team `{id}` not found")));
    };
    Ok(team.into())
}

/// Register a new team with zeroed totals.
pub async fn create_team(
    state: &SharedState,
    request: CreateTeamRequest,
) -> Result<TeamResponse, ServiceError> {
    let team = state
        .store()
        .create_team(NewTeam {
            name: request.name,
            color: request.color,
            logo: request.logo,
        })
        .await?;
    info!(team_id = team.id, name = %team.name, "team created");
    Ok(team.into())
}

/// Edit a team's display fields. Totals are owned by the standings
/// reconciler and cannot be set here.
pub async fn update_team(
    state: &SharedState,
    id: i64,
    request: UpdateTeamRequest,
) -> Result<TeamResponse, ServiceError> {
    let patch = TeamPatch {
        name: request.name,
        color: request.color,
        logo: request.logo,
        ..Default::default()
    };

    let Some(team) = state.store().update_team(id, patch).await? else {
        return Err(ServiceError::NotFound(format!("team `{id}` not found")));
    };
    Ok(team.into())
}

/// Delete a team. Its games are cascade-deleted by the store and their
/// clocks stopped here so no orphaned timer keeps ticking.
pub async fn delete_team(state: &SharedState, id: i64) -> Result<(), ServiceError> {
    let outcome = state.store().delete_team(id).await?;
    if !outcome.deleted {
        return Err(ServiceError::NotFound(format!("team `{id}` not found")));
    }

    for game_id in &outcome.cascaded_game_ids {
        state.clock().stop_timer(*game_id);
    }
    info!(
        team_id = id,
        cascaded = outcome.cascaded_game_ids.len(),
        "team deleted"
    );
    Ok(())
}

/// Teams ranked for the standings view: wins first, then point
/// differential, then points scored.
pub async fn standings(state: &SharedState) -> Result<Vec<TeamResponse>, ServiceError> {
    let mut teams = state.store().list_teams().await?;
    teams.sort_by_key(|team| {
        Reverse((
            team.wins,
            team.points_for - team.points_against,
            team.points_for,
        ))
    });
    Ok(teams.into_iter().map(Into::into).collect())
}

//! End-to-end service-layer scenarios against the in-memory store.

use std::sync::Arc;

use pitchside::{
    config::AppConfig,
    dao::{models::GameStatus, tournament_store::memory::MemoryStore},
    dto::{
        game::{CreateGameRequest, UpdateGameRequest},
        team::CreateTeamRequest,
    },
    error::ServiceError,
    services::{admin_service, game_service, seed, team_service},
    state::{AppState, SharedState},
};

fn fresh_state() -> (SharedState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(AppConfig::default(), store.clone());
    (state, store)
}

async fn register_team(state: &SharedState, name: &str) -> i64 {
    team_service::create_team(
        state,
        CreateTeamRequest {
            name: name.into(),
            color: "#112233".into(),
            logo: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn schedule_game(state: &SharedState, home: i64, away: i64) -> i64 {
    game_service::create_game(
        state,
        CreateGameRequest {
            home_team_id: home,
            away_team_id: away,
            scheduled_at: "2025-10-11T10:00:00+01:00".into(),
            field: "1".into(),
            referee: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn completion(home: i64, away: i64) -> UpdateGameRequest {
    UpdateGameRequest {
        home_score: Some(home),
        away_score: Some(away),
        status: Some(GameStatus::Completed),
        ..Default::default()
    }
}

#[tokio::test]
async fn completion_and_correction_flow_matches_expected_totals() {
    let (state, _) = fresh_state();
    let a = register_team(&state, "Team A").await;
    let b = register_team(&state, "Team B").await;
    let game = schedule_game(&state, a, b).await;

    game_service::update_game(&state, game, completion(21, 14))
        .await
        .unwrap();

    let team_a = team_service::get_team(&state, a).await.unwrap();
    let team_b = team_service::get_team(&state, b).await.unwrap();
    assert_eq!(
        (team_a.wins, team_a.losses, team_a.points_for, team_a.points_against),
        (1, 0, 21, 14)
    );
    assert_eq!(
        (team_b.wins, team_b.losses, team_b.points_for, team_b.points_against),
        (0, 1, 14, 21)
    );

    // Late correction: away side actually won 24-21.
    game_service::update_game(&state, game, completion(21, 24))
        .await
        .unwrap();

    let team_a = team_service::get_team(&state, a).await.unwrap();
    let team_b = team_service::get_team(&state, b).await.unwrap();
    assert_eq!(
        (team_a.wins, team_a.losses, team_a.points_for, team_a.points_against),
        (0, 1, 21, 24)
    );
    assert_eq!(
        (team_b.wins, team_b.losses, team_b.points_for, team_b.points_against),
        (1, 0, 24, 21)
    );
}

#[tokio::test]
async fn standings_rank_by_wins_then_differential() {
    let (state, _) = fresh_state();
    let a = register_team(&state, "A").await;
    let b = register_team(&state, "B").await;
    let c = register_team(&state, "C").await;

    let ab = schedule_game(&state, a, b).await;
    let cb = schedule_game(&state, c, b).await;
    game_service::update_game(&state, ab, completion(20, 5))
        .await
        .unwrap();
    game_service::update_game(&state, cb, completion(7, 5))
        .await
        .unwrap();

    let table = team_service::standings(&state).await.unwrap();
    let order: Vec<i64> = table.iter().map(|team| team.id).collect();
    // Both A and C have one win; A's differential (+15) beats C's (+2).
    assert_eq!(order, vec![a, c, b]);
}

#[tokio::test]
async fn responses_join_team_display_data() {
    let (state, _) = fresh_state();
    let a = register_team(&state, "Krakens").await;
    let b = register_team(&state, "Storm").await;
    let game = schedule_game(&state, a, b).await;

    let response = game_service::get_game(&state, game).await.unwrap();
    assert_eq!(response.home_team_name.as_deref(), Some("Krakens"));
    assert_eq!(response.away_team_name.as_deref(), Some("Storm"));
    assert_eq!(response.status, GameStatus::Scheduled);
    assert_eq!(response.time_remaining, 900);
}

#[tokio::test]
async fn creating_a_game_against_an_unknown_team_is_rejected() {
    let (state, _) = fresh_state();
    let a = register_team(&state, "A").await;

    let err = game_service::create_game(
        &state,
        CreateGameRequest {
            home_team_id: a,
            away_team_id: 999,
            scheduled_at: "2025-10-11T10:00:00+01:00".into(),
            field: "1".into(),
            referee: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn deleting_a_team_cascades_and_stops_clocks() {
    let (state, _) = fresh_state();
    let a = register_team(&state, "A").await;
    let b = register_team(&state, "B").await;
    let game = schedule_game(&state, a, b).await;

    // Put the game live with a running clock.
    game_service::update_game(
        &state,
        game,
        UpdateGameRequest {
            status: Some(GameStatus::InProgress),
            timer_running: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(state.clock().is_running(game));

    team_service::delete_team(&state, a).await.unwrap();

    assert!(!state.clock().is_running(game));
    assert!(matches!(
        game_service::get_game(&state, game).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[tokio::test]
async fn seed_populates_an_empty_store_once() {
    let (state, _) = fresh_state();

    let outcome = seed::seed_sample_data(&state).await.unwrap();
    assert_eq!(outcome.teams_created, 4);
    assert_eq!(outcome.games_created, 6);
    assert_eq!(outcome.rules_created, 3);

    // A second seed is refused while data exists.
    assert!(matches!(
        seed::seed_sample_data(&state).await.unwrap_err(),
        ServiceError::InvalidState(_)
    ));

    // Reset wipes everything and seeding works again.
    admin_service::reset(&state).await.unwrap();
    assert!(team_service::list_teams(&state).await.unwrap().is_empty());
    seed::seed_sample_data(&state).await.unwrap();
}

//! Clock behavior across a simulated process restart: tasks are gone, the
//! persisted running flag and countdown survive, and reconciliation
//! rebuilds the task set.

use std::{sync::Arc, time::Duration};

use pitchside::{
    config::AppConfig,
    dao::{
        models::{GamePatch, GameStatus},
        tournament_store::{TournamentStore, memory::MemoryStore},
    },
    dto::{game::CreateGameRequest, team::CreateTeamRequest},
    services::{game_service, team_service},
    state::AppState,
};

async fn live_game(state: &pitchside::state::SharedState, secs: i64) -> i64 {
    let a = team_service::create_team(
        state,
        CreateTeamRequest {
            name: "A".into(),
            color: "#000000".into(),
            logo: None,
        },
    )
    .await
    .unwrap();
    let b = team_service::create_team(
        state,
        CreateTeamRequest {
            name: "B".into(),
            color: "#ffffff".into(),
            logo: None,
        },
    )
    .await
    .unwrap();
    let game = game_service::create_game(
        state,
        CreateGameRequest {
            home_team_id: a.id,
            away_team_id: b.id,
            scheduled_at: "2025-10-11T10:00:00+01:00".into(),
            field: "1".into(),
            referee: None,
        },
    )
    .await
    .unwrap();

    state
        .store()
        .update_game(
            game.id,
            GamePatch {
                status: Some(GameStatus::InProgress),
                timer_running: Some(true),
                time_remaining: Some(secs),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    game.id
}

#[tokio::test(start_paused = true)]
async fn reconciliation_resumes_the_countdown_after_restart() {
    let store = Arc::new(MemoryStore::new());

    // First "process": clock runs for two ticks, then the process dies.
    let first = AppState::new(AppConfig::default(), store.clone());
    let game = live_game(&first, 500).await;
    first.clock().start_timer(game);
    tokio::time::sleep(Duration::from_millis(2_100)).await;
    first.clock().stop_all();

    let persisted = store.get_game(game).await.unwrap().unwrap();
    assert_eq!(persisted.time_remaining, 498);
    assert!(persisted.timer_running);

    // Second "process": only the reconciliation pass knows to resume.
    let second = AppState::new(AppConfig::default(), store.clone());
    assert!(!second.clock().is_running(game));

    let started = second.clock().reconcile_on_startup().await.unwrap();
    assert_eq!(started, 1);
    assert!(second.clock().is_running(game));

    tokio::time::sleep(Duration::from_millis(2_100)).await;
    let resumed = store.get_game(game).await.unwrap().unwrap();
    assert_eq!(resumed.time_remaining, 496);

    second.clock().stop_all();
}

#[tokio::test(start_paused = true)]
async fn reconciliation_ignores_paused_and_finished_games() {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(AppConfig::default(), store.clone());

    let game = live_game(&state, 500).await;
    // Operator paused before the restart; the persisted flag says stopped.
    store
        .update_game(
            game,
            GamePatch {
                timer_running: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let started = state.clock().reconcile_on_startup().await.unwrap();
    assert_eq!(started, 0);
    assert!(!state.clock().is_running(game));

    // No task means no decrement, however long we wait.
    tokio::time::sleep(Duration::from_secs(5)).await;
    let persisted = store.get_game(game).await.unwrap().unwrap();
    assert_eq!(persisted.time_remaining, 500);
}

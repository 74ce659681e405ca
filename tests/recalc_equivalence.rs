//! The incremental reconciler and the bulk recalculation implement the same
//! scoring rule; random edit histories must leave nothing for the repair
//! tool to fix.

use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::StdRng};

use pitchside::{
    config::AppConfig,
    dao::{models::GameStatus, tournament_store::memory::MemoryStore},
    dto::{
        game::{CreateGameRequest, UpdateGameRequest},
        team::CreateTeamRequest,
    },
    services::{admin_service, game_service, team_service},
    state::{AppState, SharedState},
};

async fn build_fixture(state: &SharedState, teams: usize, games: usize, rng: &mut StdRng) -> Vec<i64> {
    let mut team_ids = Vec::new();
    for index in 0..teams {
        let team = team_service::create_team(
            state,
            CreateTeamRequest {
                name: format!("Team {index}"),
                color: "#336699".into(),
                logo: None,
            },
        )
        .await
        .unwrap();
        team_ids.push(team.id);
    }

    let mut game_ids = Vec::new();
    for _ in 0..games {
        let home = team_ids[rng.random_range(0..team_ids.len())];
        let away = loop {
            let candidate = team_ids[rng.random_range(0..team_ids.len())];
            if candidate != home {
                break candidate;
            }
        };
        let game = game_service::create_game(
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
        .unwrap();
        game_ids.push(game.id);
    }
    game_ids
}

fn random_edit(rng: &mut StdRng) -> UpdateGameRequest {
    match rng.random_range(0..5) {
        // Complete with fresh scores (ties included).
        0 | 1 => UpdateGameRequest {
            home_score: Some(rng.random_range(0..30)),
            away_score: Some(rng.random_range(0..30)),
            status: Some(GameStatus::Completed),
            ..Default::default()
        },
        // Correct only one side's score.
        2 => UpdateGameRequest {
            home_score: Some(rng.random_range(0..30)),
            status: Some(GameStatus::Completed),
            ..Default::default()
        },
        // Complete without sending scores at all.
        3 => UpdateGameRequest {
            status: Some(GameStatus::Completed),
            ..Default::default()
        },
        // Drop the game back out of completed.
        _ => UpdateGameRequest {
            status: Some(GameStatus::InProgress),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn random_edit_histories_leave_no_drift_for_the_repair_tool() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(AppConfig::default(), store.clone());

        let game_ids = build_fixture(&state, 4, 8, &mut rng).await;

        for _ in 0..40 {
            let id = game_ids[rng.random_range(0..game_ids.len())];
            game_service::update_game(&state, id, random_edit(&mut rng))
                .await
                .unwrap();
        }

        let incremental = team_service::list_teams(&state).await.unwrap();
        let outcome = admin_service::recalculate_standings(&state).await.unwrap();
        let replayed = team_service::list_teams(&state).await.unwrap();

        assert_eq!(outcome.teams_updated, 4, "seed {seed}");
        for (before, after) in incremental.iter().zip(&replayed) {
            assert_eq!(
                (before.wins, before.losses, before.points_for, before.points_against),
                (after.wins, after.losses, after.points_for, after.points_against),
                "seed {seed}, team {}",
                before.id
            );
        }
    }
}

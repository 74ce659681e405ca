//! Standings bookkeeping.
//!
//! One scoring rule drives everything: [`game_contribution`] says what a
//! single completed game adds to each side's totals. The bulk
//! recalculation replays that rule over every completed game, and the
//! incremental path applies the *difference* between a game's old and new
//! contribution, so the two can never drift apart by construction.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::dao::{
    models::{GameEntity, GamePatch, GameStatus, TeamPatch},
    storage::StorageResult,
    tournament_store::TournamentStore,
};

/// Win/loss/points tallies for one team, as signed deltas or totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamTotals {
    /// Games won.
    pub wins: i64,
    /// Games lost.
    pub losses: i64,
    /// Points scored.
    pub points_for: i64,
    /// Points conceded.
    pub points_against: i64,
}

impl TeamTotals {
    fn minus(self, other: Self) -> Self {
        Self {
            wins: self.wins - other.wins,
            losses: self.losses - other.losses,
            points_for: self.points_for - other.points_for,
            points_against: self.points_against - other.points_against,
        }
    }

    fn plus(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            points_for: self.points_for + other.points_for,
            points_against: self.points_against + other.points_against,
        }
    }

    fn is_zero(self) -> bool {
        self == Self::default()
    }

    fn into_patch(self) -> TeamPatch {
        TeamPatch {
            wins: Some(self.wins),
            losses: Some(self.losses),
            points_for: Some(self.points_for),
            points_against: Some(self.points_against),
            ..Default::default()
        }
    }
}

/// What one completed game contributes to (home, away) totals.
///
/// Points count both ways, a strict score difference yields one win and
/// one loss, and a tie moves neither column.
fn game_contribution(home_score: i64, away_score: i64) -> (TeamTotals, TeamTotals) {
    let home = TeamTotals {
        wins: i64::from(home_score > away_score),
        losses: i64::from(home_score < away_score),
        points_for: home_score,
        points_against: away_score,
    };
    let away = TeamTotals {
        wins: home.losses,
        losses: home.wins,
        points_for: away_score,
        points_against: home_score,
    };
    (home, away)
}

/// Contribution of a game record in a given state: zero unless completed.
fn contribution_of(status: GameStatus, home_score: i64, away_score: i64) -> (TeamTotals, TeamTotals) {
    match status {
        GameStatus::Completed => game_contribution(home_score, away_score),
        _ => (TeamTotals::default(), TeamTotals::default()),
    }
}

/// Reconcile team totals with a pending game update.
///
/// `before` is the game as stored prior to the patch. The effective final
/// scores are the patched ones when provided, else the stored ones, else
/// zero. Applying `new contribution - old contribution` covers first
/// completion, score corrections (delta only), winner flips, and a game
/// dropping back out of completed, all with the same formula.
///
/// A missing team record is logged and skipped; the caller still applies
/// the game patch itself.
pub async fn apply_result_delta(
    store: &dyn TournamentStore,
    before: &GameEntity,
    patch: &GamePatch,
) -> StorageResult<()> {
    let old = contribution_of(
        before.status,
        before.home_score.unwrap_or(0),
        before.away_score.unwrap_or(0),
    );

    let final_home = patch.home_score.or(before.home_score).unwrap_or(0);
    let final_away = patch.away_score.or(before.away_score).unwrap_or(0);
    let new = contribution_of(
        patch.status.unwrap_or(before.status),
        final_home,
        final_away,
    );

    let home_delta = new.0.minus(old.0);
    let away_delta = new.1.minus(old.1);
    if home_delta.is_zero() && away_delta.is_zero() {
        return Ok(());
    }

    apply_team_delta(store, before.id, before.home_team_id, home_delta).await?;
    apply_team_delta(store, before.id, before.away_team_id, away_delta).await
}

async fn apply_team_delta(
    store: &dyn TournamentStore,
    game_id: i64,
    team_id: i64,
    delta: TeamTotals,
) -> StorageResult<()> {
    let Some(team) = store.get_team(team_id).await? else {
        warn!(game_id, team_id, "team missing; skipping standings update");
        return Ok(());
    };

    let totals = TeamTotals {
        wins: team.wins,
        losses: team.losses,
        points_for: team.points_for,
        points_against: team.points_against,
    }
    .plus(delta);

    if store
        .update_team(team_id, totals.into_patch())
        .await?
        .is_none()
    {
        warn!(game_id, team_id, "team vanished mid-update; skipping standings update");
    }
    Ok(())
}

/// Counts reported by the bulk recalculation repair tool.
#[derive(Debug, Clone, Copy, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecalculateOutcome {
    /// Teams whose totals were rewritten.
    pub teams_updated: usize,
    /// Completed games replayed.
    pub games_processed: usize,
}

/// Reset every team's totals and replay all completed games once.
///
/// This is the canonical form of the scoring rule and the manual recovery
/// path from any drift the incremental path may have accumulated.
pub async fn recalculate_all(store: &dyn TournamentStore) -> StorageResult<RecalculateOutcome> {
    let teams = store.list_teams().await?;
    let games = store.list_games().await?;

    let mut tallies: HashMap<i64, TeamTotals> = teams
        .iter()
        .map(|team| (team.id, TeamTotals::default()))
        .collect();

    let mut games_processed = 0;
    for game in &games {
        if game.status != GameStatus::Completed {
            continue;
        }
        games_processed += 1;

        let (home, away) = game_contribution(
            game.home_score.unwrap_or(0),
            game.away_score.unwrap_or(0),
        );
        for (team_id, contribution) in [(game.home_team_id, home), (game.away_team_id, away)] {
            match tallies.get_mut(&team_id) {
                Some(totals) => *totals = totals.plus(contribution),
                None => warn!(
                    game_id = game.id,
                    team_id, "completed game references unknown team; skipping"
                ),
            }
        }
    }

    let mut teams_updated = 0;
    for team in &teams {
        let totals = tallies[&team.id];
        if store
            .update_team(team.id, totals.into_patch())
            .await?
            .is_some()
        {
            teams_updated += 1;
        }
    }

    info!(teams_updated, games_processed, "standings recalculated");
    Ok(RecalculateOutcome {
        teams_updated,
        games_processed,
    })
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;
    use crate::dao::{
        models::{NewGame, NewTeam, TeamEntity},
        tournament_store::memory::MemoryStore,
    };

    async fn team(store: &MemoryStore, name: &str) -> TeamEntity {
        store
            .create_team(NewTeam {
                name: name.into(),
                color: "#000000".into(),
                logo: None,
            })
            .await
            .unwrap()
    }

    async fn game(store: &MemoryStore, home: i64, away: i64) -> GameEntity {
        store
            .create_game(NewGame {
                home_team_id: home,
                away_team_id: away,
                scheduled_at: OffsetDateTime::UNIX_EPOCH,
                field: "1".into(),
                referee: None,
                time_remaining: 900,
            })
            .await
            .unwrap()
    }

    fn completion(home: i64, away: i64) -> GamePatch {
        GamePatch {
            home_score: Some(home),
            away_score: Some(away),
            status: Some(GameStatus::Completed),
            ..Default::default()
        }
    }

    /// Run the reconciler and then apply the patch, as the update operation does.
    async fn update(store: &MemoryStore, id: i64, patch: GamePatch) {
        let before = store.get_game(id).await.unwrap().unwrap();
        apply_result_delta(store, &before, &patch).await.unwrap();
        store.update_game(id, patch).await.unwrap();
    }

    async fn totals(store: &MemoryStore, id: i64) -> (i64, i64, i64, i64) {
        let team = store.get_team(id).await.unwrap().unwrap();
        (team.wins, team.losses, team.points_for, team.points_against)
    }

    #[test]
    fn contribution_awards_points_both_ways_and_one_result() {
        let (home, away) = game_contribution(21, 14);
        assert_eq!(home, TeamTotals { wins: 1, losses: 0, points_for: 21, points_against: 14 });
        assert_eq!(away, TeamTotals { wins: 0, losses: 1, points_for: 14, points_against: 21 });
    }

    #[test]
    fn tied_contribution_moves_no_result_column() {
        let (home, away) = game_contribution(7, 7);
        assert_eq!(home.wins + home.losses, 0);
        assert_eq!(away.wins + away.losses, 0);
        assert_eq!(home.points_for, 7);
        assert_eq!(away.points_for, 7);
    }

    #[tokio::test]
    async fn first_completion_credits_both_teams() {
        let store = MemoryStore::new();
        let a = team(&store, "A").await;
        let b = team(&store, "B").await;
        let g = game(&store, a.id, b.id).await;

        update(&store, g.id, completion(21, 14)).await;

        assert_eq!(totals(&store, a.id).await, (1, 0, 21, 14));
        assert_eq!(totals(&store, b.id).await, (0, 1, 14, 21));
    }

    #[tokio::test]
    async fn score_correction_applies_only_the_delta_and_flips_the_winner() {
        let store = MemoryStore::new();
        let a = team(&store, "A").await;
        let b = team(&store, "B").await;
        let g = game(&store, a.id, b.id).await;

        update(&store, g.id, completion(21, 14)).await;
        // Correction while the game stays completed: 21-14 becomes 21-24.
        update(&store, g.id, completion(21, 24)).await;

        assert_eq!(totals(&store, a.id).await, (0, 1, 21, 24));
        assert_eq!(totals(&store, b.id).await, (1, 0, 24, 21));
    }

    #[tokio::test]
    async fn repeated_identical_completion_does_not_double_count() {
        let store = MemoryStore::new();
        let a = team(&store, "A").await;
        let b = team(&store, "B").await;
        let g = game(&store, a.id, b.id).await;

        update(&store, g.id, completion(10, 3)).await;
        update(&store, g.id, completion(10, 3)).await;

        assert_eq!(totals(&store, a.id).await, (1, 0, 10, 3));
        assert_eq!(totals(&store, b.id).await, (0, 1, 3, 10));
    }

    #[tokio::test]
    async fn reverting_a_completion_takes_the_result_back() {
        let store = MemoryStore::new();
        let a = team(&store, "A").await;
        let b = team(&store, "B").await;
        let g = game(&store, a.id, b.id).await;

        update(&store, g.id, completion(21, 14)).await;
        update(
            &store,
            g.id,
            GamePatch {
                status: Some(GameStatus::InProgress),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(totals(&store, a.id).await, (0, 0, 0, 0));
        assert_eq!(totals(&store, b.id).await, (0, 0, 0, 0));
    }

    #[tokio::test]
    async fn completion_without_scores_falls_back_to_stored_then_zero() {
        let store = MemoryStore::new();
        let a = team(&store, "A").await;
        let b = team(&store, "B").await;
        let g = game(&store, a.id, b.id).await;

        // Scores recorded earlier, completion patch carries only the status.
        update(
            &store,
            g.id,
            GamePatch {
                home_score: Some(5),
                away_score: Some(2),
                status: Some(GameStatus::InProgress),
                ..Default::default()
            },
        )
        .await;
        update(
            &store,
            g.id,
            GamePatch {
                status: Some(GameStatus::Completed),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(totals(&store, a.id).await, (1, 0, 5, 2));
        assert_eq!(totals(&store, b.id).await, (0, 1, 2, 5));
    }

    #[tokio::test]
    async fn missing_team_is_skipped_without_failing() {
        let store = MemoryStore::new();
        let a = team(&store, "A").await;
        let g = game(&store, a.id, 999).await;

        update(&store, g.id, completion(3, 9)).await;

        // The present side is still reconciled.
        assert_eq!(totals(&store, a.id).await, (0, 1, 3, 9));
    }

    #[tokio::test]
    async fn recalculation_matches_incremental_history() {
        let store = MemoryStore::new();
        let a = team(&store, "A").await;
        let b = team(&store, "B").await;
        let c = team(&store, "C").await;

        let ab = game(&store, a.id, b.id).await;
        let bc = game(&store, b.id, c.id).await;
        let ca = game(&store, c.id, a.id).await;

        update(&store, ab.id, completion(21, 14)).await;
        update(&store, bc.id, completion(7, 7)).await;
        update(&store, ca.id, completion(10, 12)).await;
        // Late correction on the first game.
        update(&store, ab.id, completion(21, 24)).await;

        let before: Vec<_> = store.list_teams().await.unwrap();
        let outcome = recalculate_all(&store).await.unwrap();
        let after: Vec<_> = store.list_teams().await.unwrap();

        assert_eq!(outcome.teams_updated, 3);
        assert_eq!(outcome.games_processed, 3);
        assert_eq!(before, after);
    }
}

use std::sync::Arc;

use futures::future::BoxFuture;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::dao::{
    models::{
        GameEntity, GamePatch, NewGame, NewRule, NewTeam, RuleEntity, RulePatch, TeamEntity,
        TeamPatch,
    },
    storage::StorageResult,
    tournament_store::{TeamDeletion, TournamentStore},
};

/// Complete tournament dataset held by the local backends.
///
/// Insertion order of the maps is the listing order, which matches the
/// auto-increment ordering a SQL backend would produce. The next-id
/// counters are part of the dataset so a persisted snapshot keeps its id
/// sequence across restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Dataset {
    pub(crate) teams: IndexMap<i64, TeamEntity>,
    pub(crate) games: IndexMap<i64, GameEntity>,
    pub(crate) rules: IndexMap<i64, RuleEntity>,
    pub(crate) next_team_id: i64,
    pub(crate) next_game_id: i64,
    pub(crate) next_rule_id: i64,
}

impl Dataset {
    pub(crate) fn create_team(&mut self, team: NewTeam) -> TeamEntity {
        self.next_team_id += 1;
        let entity = team.into_entity(self.next_team_id);
        self.teams.insert(entity.id, entity.clone());
        entity
    }

    pub(crate) fn update_team(&mut self, id: i64, patch: TeamPatch) -> Option<TeamEntity> {
        let team = self.teams.get_mut(&id)?;
        team.apply(patch);
        Some(team.clone())
    }

    pub(crate) fn delete_team(&mut self, id: i64) -> TeamDeletion {
        let deleted = self.teams.shift_remove(&id).is_some();
        let mut cascaded_game_ids = Vec::new();
        if deleted {
            self.games.retain(|game_id, game| {
                let orphaned = game.home_team_id == id || game.away_team_id == id;
                if orphaned {
                    cascaded_game_ids.push(*game_id);
                }
                !orphaned
            });
        }
        TeamDeletion {
            deleted,
            cascaded_game_ids,
        }
    }

    pub(crate) fn create_game(&mut self, game: NewGame) -> GameEntity {
        self.next_game_id += 1;
        let entity = game.into_entity(self.next_game_id);
        self.games.insert(entity.id, entity.clone());
        entity
    }

    pub(crate) fn update_game(&mut self, id: i64, patch: GamePatch) -> Option<GameEntity> {
        let game = self.games.get_mut(&id)?;
        game.apply(patch);
        Some(game.clone())
    }

    pub(crate) fn create_rule(&mut self, rule: NewRule) -> RuleEntity {
        self.next_rule_id += 1;
        let entity = rule.into_entity(self.next_rule_id);
        self.rules.insert(entity.id, entity.clone());
        entity
    }

    pub(crate) fn update_rule(&mut self, id: i64, patch: RulePatch) -> Option<RuleEntity> {
        let rule = self.rules.get_mut(&id)?;
        rule.apply(patch);
        Some(rule.clone())
    }
}

/// Volatile store keeping the whole dataset behind a single lock.
///
/// Also doubles as the test harness store since it never fails.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Dataset>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStore for MemoryStore {
    fn create_team(&self, team: NewTeam) -> BoxFuture<'static, StorageResult<TeamEntity>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.write().await.create_team(team)) })
    }

    fn get_team(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.read().await.teams.get(&id).cloned()) })
    }

    fn update_team(
        &self,
        id: i64,
        patch: TeamPatch,
    ) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.write().await.update_team(id, patch)) })
    }

    fn delete_team(&self, id: i64) -> BoxFuture<'static, StorageResult<TeamDeletion>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.write().await.delete_team(id)) })
    }

    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.read().await.teams.values().cloned().collect()) })
    }

    fn create_game(&self, game: NewGame) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.write().await.create_game(game)) })
    }

    fn get_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.read().await.games.get(&id).cloned()) })
    }

    fn update_game(
        &self,
        id: i64,
        patch: GamePatch,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.write().await.update_game(id, patch)) })
    }

    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.write().await.games.shift_remove(&id).is_some()) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.read().await.games.values().cloned().collect()) })
    }

    fn create_rule(&self, rule: NewRule) -> BoxFuture<'static, StorageResult<RuleEntity>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.write().await.create_rule(rule)) })
    }

    fn update_rule(
        &self,
        id: i64,
        patch: RulePatch,
    ) -> BoxFuture<'static, StorageResult<Option<RuleEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.write().await.update_rule(id, patch)) })
    }

    fn delete_rule(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.write().await.rules.shift_remove(&id).is_some()) })
    }

    fn list_rules(&self) -> BoxFuture<'static, StorageResult<Vec<RuleEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.read().await.rules.values().cloned().collect()) })
    }

    fn reset(&self) -> BoxFuture<'static, StorageResult<()>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            *inner.write().await = Dataset::default();
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;

    fn new_team(name: &str) -> NewTeam {
        NewTeam {
            name: name.into(),
            color: "#112233".into(),
            logo: None,
        }
    }

    fn new_game(home: i64, away: i64) -> NewGame {
        NewGame {
            home_team_id: home,
            away_team_id: away,
            scheduled_at: OffsetDateTime::UNIX_EPOCH,
            field: "1".into(),
            referee: None,
            time_remaining: 900,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_listing_keeps_insertion_order() {
        let store = MemoryStore::new();
        let a = store.create_team(new_team("A")).await.unwrap();
        let b = store.create_team(new_team("B")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        let listed: Vec<i64> = store
            .list_teams()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(listed, vec![1, 2]);
    }

    #[tokio::test]
    async fn deleting_a_team_cascades_to_its_games() {
        let store = MemoryStore::new();
        let a = store.create_team(new_team("A")).await.unwrap();
        let b = store.create_team(new_team("B")).await.unwrap();
        let c = store.create_team(new_team("C")).await.unwrap();
        let ab = store.create_game(new_game(a.id, b.id)).await.unwrap();
        let bc = store.create_game(new_game(b.id, c.id)).await.unwrap();
        let ca = store.create_game(new_game(c.id, a.id)).await.unwrap();

        let outcome = store.delete_team(a.id).await.unwrap();
        assert!(outcome.deleted);
        assert_eq!(outcome.cascaded_game_ids, vec![ab.id, ca.id]);

        let remaining: Vec<i64> = store
            .list_games()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(remaining, vec![bc.id]);
    }

    #[tokio::test]
    async fn updates_report_not_found_as_none() {
        let store = MemoryStore::new();
        assert!(
            store
                .update_game(42, GamePatch::default())
                .await
                .unwrap()
                .is_none()
        );
        assert!(!store.delete_game(42).await.unwrap());
    }
}

use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use futures::future::BoxFuture;
use tokio::sync::RwLock;
use tracing::info;

use crate::dao::{
    models::{
        GameEntity, GamePatch, NewGame, NewRule, NewTeam, RuleEntity, RulePatch, TeamEntity,
        TeamPatch,
    },
    storage::{StorageError, StorageResult},
    tournament_store::{TeamDeletion, TournamentStore, memory::Dataset},
};

/// Store that keeps the dataset in memory and snapshots it to a JSON file
/// after every mutation, reloading the snapshot at startup.
///
/// Good enough for a one-day tournament running on a single box; every
/// write rewrites the whole file.
#[derive(Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
    inner: Arc<RwLock<Dataset>>,
}

impl JsonFileStore {
    /// Open the store, loading an existing snapshot when the file is present.
    pub async fn open(path: PathBuf) -> StorageResult<Self> {
        let dataset = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Dataset>(&bytes).map_err(|source| {
                StorageError::unavailable(
                    format!("corrupt snapshot at {}", path.display()),
                    source,
                )
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no snapshot found; starting empty");
                Dataset::default()
            }
            Err(source) => {
                return Err(StorageError::unavailable(
                    format!("cannot read snapshot at {}", path.display()),
                    source,
                ));
            }
        };

        Ok(Self {
            path: Arc::new(path),
            inner: Arc::new(RwLock::new(dataset)),
        })
    }

    /// Serialize the dataset to disk. Called with the write lock held so
    /// snapshots cannot interleave.
    async fn persist(path: &PathBuf, dataset: &Dataset) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(dataset).map_err(|source| {
            StorageError::unavailable("cannot serialize snapshot".into(), source)
        })?;

        tokio::fs::write(path, bytes).await.map_err(|source| {
            StorageError::unavailable(
                format!("cannot write snapshot at {}", path.display()),
                source,
            )
        })
    }

    /// Run a mutation against the dataset and persist the result.
    fn mutate<T, F>(&self, op: F) -> BoxFuture<'static, StorageResult<T>>
    where
        T: Send + 'static,
        F: FnOnce(&mut Dataset) -> T + Send + 'static,
    {
        let path = self.path.clone();
        let inner = self.inner.clone();
        Box::pin(async move {
            let mut dataset = inner.write().await;
            let value = op(&mut dataset);
            Self::persist(&path, &dataset).await?;
            Ok(value)
        })
    }
}

impl TournamentStore for JsonFileStore {
    fn create_team(&self, team: NewTeam) -> BoxFuture<'static, StorageResult<TeamEntity>> {
        self.mutate(move |dataset| dataset.create_team(team))
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
        self.mutate(move |dataset| dataset.update_team(id, patch))
    }

    fn delete_team(&self, id: i64) -> BoxFuture<'static, StorageResult<TeamDeletion>> {
        self.mutate(move |dataset| dataset.delete_team(id))
    }

    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.read().await.teams.values().cloned().collect()) })
    }

    fn create_game(&self, game: NewGame) -> BoxFuture<'static, StorageResult<GameEntity>> {
        self.mutate(move |dataset| dataset.create_game(game))
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
        self.mutate(move |dataset| dataset.update_game(id, patch))
    }

    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>> {
        self.mutate(move |dataset| dataset.games.shift_remove(&id).is_some())
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.read().await.games.values().cloned().collect()) })
    }

    fn create_rule(&self, rule: NewRule) -> BoxFuture<'static, StorageResult<RuleEntity>> {
        self.mutate(move |dataset| dataset.create_rule(rule))
    }

    fn update_rule(
        &self,
        id: i64,
        patch: RulePatch,
    ) -> BoxFuture<'static, StorageResult<Option<RuleEntity>>> {
        self.mutate(move |dataset| dataset.update_rule(id, patch))
    }

    fn delete_rule(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>> {
        self.mutate(move |dataset| dataset.rules.shift_remove(&id).is_some())
    }

    fn list_rules(&self) -> BoxFuture<'static, StorageResult<Vec<RuleEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.read().await.rules.values().cloned().collect()) })
    }

    fn reset(&self) -> BoxFuture<'static, StorageResult<()>> {
        self.mutate(|dataset| *dataset = Dataset::default())
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        // Probe that the snapshot location is still writable.
        let path = self.path.clone();
        let inner = self.inner.clone();
        Box::pin(async move {
            let dataset = inner.read().await;
            Self::persist(&path, &dataset).await
        })
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;

    fn snapshot_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("tournament.json")
    }

    #[tokio::test]
    async fn snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot_path(&dir);

        let store = JsonFileStore::open(path.clone()).await.unwrap();
        let team = store
            .create_team(NewTeam {
                name: "Krakens".into(),
                color: "#d80e61".into(),
                logo: None,
            })
            .await
            .unwrap();
        let game = store
            .create_game(crate::dao::models::NewGame {
                home_team_id: team.id,
                away_team_id: team.id,
                scheduled_at: OffsetDateTime::UNIX_EPOCH,
                field: "1".into(),
                referee: None,
                time_remaining: 900,
            })
            .await
            .unwrap();
        drop(store);

        let reopened = JsonFileStore::open(path).await.unwrap();
        assert_eq!(
            reopened.get_team(team.id).await.unwrap(),
            Some(team.clone())
        );
        assert_eq!(reopened.get_game(game.id).await.unwrap(), Some(game));

        // Id sequence continues after reload instead of reusing ids.
        let next = reopened
            .create_team(NewTeam {
                name: "Storm".into(),
                color: "#dc2626".into(),
                logo: None,
            })
            .await
            .unwrap();
        assert_eq!(next.id, team.id + 1);
    }

    #[tokio::test]
    async fn corrupt_snapshot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot_path(&dir);
        tokio::fs::write(&path, b"not json").await.unwrap();

        assert!(JsonFileStore::open(path).await.is_err());
    }
}

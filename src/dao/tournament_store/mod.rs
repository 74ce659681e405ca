/// JSON-file-backed store persisting a snapshot after every mutation.
pub mod file;
/// Volatile in-memory store.
pub mod memory;

use futures::future::BoxFuture;

use crate::dao::models::{
    GameEntity, GamePatch, NewGame, NewRule, NewTeam, RuleEntity, RulePatch, TeamEntity, TeamPatch,
};
use crate::dao::storage::StorageResult;

/// Outcome of deleting a team, including the games removed by the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDeletion {
    /// Whether the team existed.
    pub deleted: bool,
    /// Ids of games referencing the team that were deleted alongside it.
    /// Callers must stop any live clock for these ids.
    pub cascaded_game_ids: Vec<i64>,
}

/// Abstraction over the persistence layer for teams, games, and rules.
///
/// Update methods return the post-patch entity, or `None` when the id is
/// unknown. Backends do not interpret the records they hold; all scoring
/// and clock semantics live in the service layer.
pub trait TournamentStore: Send + Sync {
    /// Insert a team with a freshly assigned id and zeroed totals.
    fn create_team(&self, team: NewTeam) -> BoxFuture<'static, StorageResult<TeamEntity>>;
    /// Fetch a team by id.
    fn get_team(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>>;
    /// Patch a team, returning the updated record.
    fn update_team(
        &self,
        id: i64,
        patch: TeamPatch,
    ) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>>;
    /// Delete a team and cascade-delete the games that reference it.
    fn delete_team(&self, id: i64) -> BoxFuture<'static, StorageResult<TeamDeletion>>;
    /// All teams in creation order.
    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>>;

    /// Insert a game with a freshly assigned id and a fresh clock.
    fn create_game(&self, game: NewGame) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Fetch a game by id.
    fn get_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Patch a game, returning the updated record.
    fn update_game(
        &self,
        id: i64,
        patch: GamePatch,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Delete a game. Returns whether it existed.
    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>>;
    /// All games in creation order.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;

    /// Insert a rule entry with a freshly assigned id.
    fn create_rule(&self, rule: NewRule) -> BoxFuture<'static, StorageResult<RuleEntity>>;
    /// Patch a rule entry, returning the updated record.
    fn update_rule(
        &self,
        id: i64,
        patch: RulePatch,
    ) -> BoxFuture<'static, StorageResult<Option<RuleEntity>>>;
    /// Delete a rule entry. Returns whether it existed.
    fn delete_rule(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>>;
    /// All rule entries, unordered; the service layer sorts for the page.
    fn list_rules(&self) -> BoxFuture<'static, StorageResult<Vec<RuleEntity>>>;

    /// Wipe every collection. Manual recovery / re-seeding path.
    fn reset(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Probe the backend, failing when it cannot serve requests.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}

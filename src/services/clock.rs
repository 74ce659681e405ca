//! Per-game countdown clocks.
//!
//! Each in-progress game with a running clock gets one background task
//! ticking once per second. The tasks themselves are never persisted;
//! their effects (`time_remaining`, `timer_running`) are, and
//! [`ClockManager::reconcile_on_startup`] rebuilds the task set from them
//! after a restart.

use std::{sync::Arc, time::Duration};

use dashmap::DashMap;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::dao::{
    models::{GamePatch, GameStatus},
    storage::{StorageError, StorageResult},
    tournament_store::TournamentStore,
};

/// Interval between clock decrements.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// What a single tick decided about the game it serves.
#[derive(Debug, PartialEq, Eq)]
enum TickOutcome {
    /// Countdown decremented and persisted; keep ticking.
    Running,
    /// Game is gone, no longer in progress, or just hit zero; stop ticking.
    Stopped,
}

/// Owner of all live countdown tasks, keyed by game id.
///
/// At most one task exists per game. `start_timer` replaces any previous
/// task, `stop_timer` aborts synchronously (the underlying task is parked
/// between ticks, so no tick can land after the abort returns), and a
/// finished task removes its own registry entry.
pub struct ClockManager {
    store: Arc<dyn TournamentStore>,
    timers: Arc<DashMap<i64, JoinHandle<()>>>,
}

impl ClockManager {
    /// Create a manager with no running clocks.
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self {
            store,
            timers: Arc::new(DashMap::new()),
        }
    }

    /// Start (or restart) the countdown task for a game.
    pub fn start_timer(&self, game_id: i64) {
        self.stop_timer(game_id);

        let store = self.store.clone();
        let timers = self.timers.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick completes immediately; consume it so
            // the first decrement lands a full period after start.
            interval.tick().await;

            loop {
                interval.tick().await;
                match tick_once(store.as_ref(), game_id).await {
                    Ok(TickOutcome::Running) => {}
                    Ok(TickOutcome::Stopped) => break,
                    Err(err) => {
                        // Fail safe: a frozen clock beats a corrupted one.
                        warn!(game_id, error = %err, "clock tick failed; freezing clock");
                        break;
                    }
                }
            }

            timers.remove(&game_id);
            debug!(game_id, "clock task finished");
        });

        self.timers.insert(game_id, handle);
    }

    /// Stop the countdown task for a game. Idempotent; returns with the
    /// task already canceled.
    pub fn stop_timer(&self, game_id: i64) {
        if let Some((_, handle)) = self.timers.remove(&game_id) {
            handle.abort();
        }
    }

    /// Stop every live countdown. Used when the dataset is wiped.
    pub fn stop_all(&self) {
        let ids: Vec<i64> = self.timers.iter().map(|entry| *entry.key()).collect();
        for id in ids {
            self.stop_timer(id);
        }
    }

    /// Whether a countdown task currently exists for this game.
    pub fn is_running(&self, game_id: i64) -> bool {
        self.timers.contains_key(&game_id)
    }

    /// Rebuild the task set from persisted state after a restart: every
    /// game that is in progress, flagged running, and has time left gets a
    /// fresh task. Returns how many clocks were started.
    pub async fn reconcile_on_startup(&self) -> StorageResult<usize> {
        let games = self.store.list_games().await?;
        let mut started = 0;
        for game in games {
            if game.status == GameStatus::InProgress && game.timer_running && game.time_remaining > 0
            {
                self.start_timer(game.id);
                started += 1;
            }
        }
        if started > 0 {
            info!(started, "restarted game clocks from persisted state");
        }
        Ok(started)
    }
}

/// Advance one game's clock by one tick.
///
/// Reads the game fresh each time so an operator-side status change made
/// between ticks is observed and stops the clock.
async fn tick_once(store: &dyn TournamentStore, game_id: i64) -> Result<TickOutcome, StorageError> {
    let Some(game) = store.get_game(game_id).await? else {
        return Ok(TickOutcome::Stopped);
    };

    if game.status != GameStatus::InProgress {
        return Ok(TickOutcome::Stopped);
    }

    let remaining = game.time_remaining - 1;
    if remaining <= 0 {
        store
            .update_game(
                game_id,
                GamePatch {
                    time_remaining: Some(0),
                    timer_running: Some(false),
                    ..Default::default()
                },
            )
            .await?;
        return Ok(TickOutcome::Stopped);
    }

    store
        .update_game(
            game_id,
            GamePatch {
                time_remaining: Some(remaining),
                timer_running: Some(true),
                ..Default::default()
            },
        )
        .await?;
    Ok(TickOutcome::Running)
}

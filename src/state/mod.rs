//! Shared application state handed to every request handler.

use std::sync::Arc;

use crate::{config::AppConfig, dao::tournament_store::TournamentStore, services::clock::ClockManager};

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state: configuration, the storage backend chosen at
/// boot, and the live clock registry.
pub struct AppState {
    config: AppConfig,
    store: Arc<dyn TournamentStore>,
    clock: ClockManager,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig, store: Arc<dyn TournamentStore>) -> SharedState {
        let clock = ClockManager::new(store.clone());
        Arc::new(Self {
            config,
            store,
            clock,
        })
    }

    /// Runtime configuration loaded at boot.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle to the storage backend.
    pub fn store(&self) -> Arc<dyn TournamentStore> {
        self.store.clone()
    }

    /// Registry of live game clocks.
    pub fn clock(&self) -> &ClockManager {
        &self.clock
    }
}

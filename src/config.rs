//! Application-level configuration loading: port, shared admin password,
//! storage backend selection, and clock defaults.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::dao::models::DEFAULT_HALF_SECONDS;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "PITCHSIDE_CONFIG_PATH";
/// Shared password accepted when the config file does not set one.
const DEFAULT_ADMIN_PASSWORD: &str = "pitchside-admin";
/// Port bound when neither the config file nor `PORT` set one.
const DEFAULT_PORT: u16 = 8080;

/// Which persistence backend to run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Volatile in-memory dataset.
    Memory,
    /// JSON snapshot file at the given path.
    File(PathBuf),
}

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Port the HTTP server binds to. `PORT` env still wins over this.
    pub port: u16,
    /// Shared static credential required on mutating routes.
    pub admin_password: String,
    /// Selected persistence backend.
    pub storage: StorageBackend,
    /// Countdown length of one half, in seconds.
    pub half_seconds: i64,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        backend = ?config.storage,
                        "loaded configuration"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Effective port, honoring the `PORT` environment override.
    pub fn effective_port(&self) -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            admin_password: DEFAULT_ADMIN_PASSWORD.into(),
            storage: StorageBackend::Memory,
            half_seconds: DEFAULT_HALF_SECONDS,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    port: Option<u16>,
    admin_password: Option<String>,
    storage: Option<RawStorage>,
    half_seconds: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case", tag = "backend")]
/// JSON representation of the storage backend selection.
enum RawStorage {
    Memory,
    File { path: PathBuf },
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            port: value.port.unwrap_or(defaults.port),
            admin_password: value.admin_password.unwrap_or(defaults.admin_password),
            storage: match value.storage {
                Some(RawStorage::Memory) | None => StorageBackend::Memory,
                Some(RawStorage::File { path }) => StorageBackend::File(path),
            },
            half_seconds: value
                .half_seconds
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.half_seconds),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

//! DTO definitions used by the admin repair and bootstrap operations.

use serde::Serialize;
use utoipa::ToSchema;

/// Generic action acknowledgement used by admin endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Human-readable outcome.
    pub message: String,
}

/// Result of the startup clock reconciliation pass.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitTimersResponse {
    /// How many game clocks were started.
    pub timers_started: usize,
}

/// Result of seeding the store with the sample tournament.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    /// Teams created.
    pub teams_created: usize,
    /// Games created.
    pub games_created: usize,
    /// Rules created.
    pub rules_created: usize,
}

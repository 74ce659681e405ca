//! Service layer holding the scoring, clock, and CRUD semantics.

/// Admin repair and bootstrap operations.
pub mod admin_service;
/// Per-game countdown clock management.
pub mod clock;
/// OpenAPI documentation generation.
pub mod documentation;
/// Game CRUD and the operator update flow.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Rules page CRUD.
pub mod rule_service;
/// Sample tournament bootstrap data.
pub mod seed;
/// Standings reconciliation and bulk recalculation.
pub mod standings;
/// Team CRUD and the standings ranking.
pub mod team_service;

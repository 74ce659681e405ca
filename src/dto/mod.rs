//! Request and response payloads for the HTTP API.

/// Admin operation payloads (recalculate, reset, seed, timers).
pub mod admin;
/// Game request/response payloads.
pub mod game;
/// Health response payload.
pub mod health;
/// Rules page payloads.
pub mod rule;
/// Team and standings payloads.
pub mod team;
/// Validation helpers for DTOs.
pub mod validation;

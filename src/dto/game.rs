//! DTO definitions for games, including the team-joined responses the
//! schedule view renders from.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::{GameEntity, GamePatch, GameStatus, TeamEntity},
    dto::validation::{parse_rfc3339, validate_half, validate_rfc3339},
    error::ServiceError,
};

/// Payload to schedule a new game between two registered teams.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Identifier of the home team.
    pub home_team_id: i64,
    /// Identifier of the away team.
    pub away_team_id: i64,
    /// Kickoff time as an RFC 3339 timestamp.
    #[validate(custom(function = validate_rfc3339))]
    pub scheduled_at: String,
    /// Pitch / field label.
    #[validate(length(min = 1, max = 32))]
    pub field: String,
    /// Optional referee label.
    #[validate(length(min = 1, max = 64))]
    pub referee: Option<String>,
}

/// Payload to edit a game: scores, status, clock, schedule. Absent fields
/// stay untouched. A `timer_running` change drives the live clock.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    /// New home score.
    #[validate(range(min = 0))]
    pub home_score: Option<i64>,
    /// New away score.
    #[validate(range(min = 0))]
    pub away_score: Option<i64>,
    /// New lifecycle status.
    pub status: Option<GameStatus>,
    /// New half number (1 or 2).
    pub half: Option<i64>,
    /// New countdown value in seconds.
    #[validate(range(min = 0))]
    pub time_remaining: Option<i64>,
    /// Start or stop the live clock.
    pub timer_running: Option<bool>,
    /// New referee label; explicit `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub referee: Option<Option<String>>,
    /// New kickoff time as an RFC 3339 timestamp.
    #[validate(custom(function = validate_rfc3339))]
    pub scheduled_at: Option<String>,
    /// New pitch / field label.
    #[validate(length(min = 1, max = 32))]
    pub field: Option<String>,
}

impl UpdateGameRequest {
    /// Convert to a storage patch, parsing the timestamp.
    pub fn into_patch(self) -> Result<GamePatch, ServiceError> {
        if let Some(half) = self.half {
            validate_half(half)
                .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;
        }
        let scheduled_at = self
            .scheduled_at
            .as_deref()
            .map(parse_rfc3339)
            .transpose()
            .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;

        Ok(GamePatch {
            home_score: self.home_score,
            away_score: self.away_score,
            status: self.status,
            half: self.half,
            time_remaining: self.time_remaining,
            timer_running: self.timer_running,
            referee: self.referee,
            scheduled_at,
            field: self.field,
        })
    }
}

/// A game as returned by the API, joined with both teams' display data.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Stable identifier.
    pub id: i64,
    /// Identifier of the home team.
    pub home_team_id: i64,
    /// Identifier of the away team.
    pub away_team_id: i64,
    /// Home score, null until first recorded.
    pub home_score: Option<i64>,
    /// Away score, null until first recorded.
    pub away_score: Option<i64>,
    /// Kickoff time, RFC 3339.
    pub scheduled_at: String,
    /// Pitch / field label.
    pub field: String,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Current half of play.
    pub half: i64,
    /// Seconds left on the clock.
    pub time_remaining: i64,
    /// Whether the countdown is live.
    pub timer_running: bool,
    /// Optional referee label.
    pub referee: Option<String>,
    /// Home team display name, when the team still exists.
    pub home_team_name: Option<String>,
    /// Home team display color.
    pub home_team_color: Option<String>,
    /// Home team logo URL.
    pub home_team_logo: Option<String>,
    /// Away team display name, when the team still exists.
    pub away_team_name: Option<String>,
    /// Away team display color.
    pub away_team_color: Option<String>,
    /// Away team logo URL.
    pub away_team_logo: Option<String>,
}

impl GameResponse {
    /// Join a stored game with its teams' display data.
    pub fn joined(game: GameEntity, home: Option<&TeamEntity>, away: Option<&TeamEntity>) -> Self {
        let scheduled_at = game
            .scheduled_at
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "invalid-timestamp".into());

        Self {
            id: game.id,
            home_team_id: game.home_team_id,
            away_team_id: game.away_team_id,
            home_score: game.home_score,
            away_score: game.away_score,
            scheduled_at,
            field: game.field,
            status: game.status,
            half: game.half,
            time_remaining: game.time_remaining,
            timer_running: game.timer_running,
            referee: game.referee,
            home_team_name: home.map(|t| t.name.clone()),
            home_team_color: home.map(|t| t.color.clone()),
            home_team_logo: home.and_then(|t| t.logo.clone()),
            away_team_name: away.map(|t| t.name.clone()),
            away_team_color: away.map(|t| t.color.clone()),
            away_team_logo: away.and_then(|t| t.logo.clone()),
        }
    }
}

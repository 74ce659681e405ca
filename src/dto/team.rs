//! DTO definitions for teams and the derived standings view.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{dao::models::TeamEntity, dto::validation::validate_hex_color};

/// Payload to register a new team.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    /// Display name.
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    /// Hex display color (`#rrggbb`).
    #[validate(custom(function = validate_hex_color))]
    pub color: String,
    /// Optional logo URL.
    #[validate(url)]
    pub logo: Option<String>,
}

/// Payload to edit an existing team. Absent fields stay untouched.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    /// New display name.
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    /// New display color.
    #[validate(custom(function = validate_hex_color))]
    pub color: Option<String>,
    /// New logo URL; explicit `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub logo: Option<Option<String>>,
}

/// A team as returned by the API, totals included.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    /// Stable identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Hex display color.
    pub color: String,
    /// Optional logo URL.
    pub logo: Option<String>,
    /// Completed games won.
    pub wins: i64,
    /// Completed games lost.
    pub losses: i64,
    /// Points scored across completed games.
    pub points_for: i64,
    /// Points conceded across completed games.
    pub points_against: i64,
}

impl From<TeamEntity> for TeamResponse {
    fn from(team: TeamEntity) -> Self {
        Self {
            id: team.id,
            name: team.name,
            color: team.color,
            logo: team.logo,
            wins: team.wins,
            losses: team.losses,
            points_for: team.points_for,
            points_against: team.points_against,
        }
    }
}

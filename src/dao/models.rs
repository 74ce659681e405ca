use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Countdown length, in seconds, of one half of play.
pub const DEFAULT_HALF_SECONDS: i64 = 900;

/// Representation of a team stored in persistence and shared across layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamEntity {
    /// Stable identifier assigned by the store.
    pub id: i64,
    /// Display name of the team.
    pub name: String,
    /// Hex display color (`#rrggbb`).
    pub color: String,
    /// Optional logo URL shown next to the team name.
    pub logo: Option<String>,
    /// Completed games won. Mutated only by the standings reconciler.
    pub wins: i64,
    /// Completed games lost. Mutated only by the standings reconciler.
    pub losses: i64,
    /// Cumulative points scored across completed games.
    pub points_for: i64,
    /// Cumulative points conceded across completed games.
    pub points_against: i64,
}

/// Lifecycle status of a scheduled game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    /// Not yet started; scores are still null.
    Scheduled,
    /// Currently being played; the clock may be running.
    InProgress,
    /// Final; the game contributes to standings.
    Completed,
}

/// A scheduled game between two teams, persisted by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Stable identifier assigned by the store.
    pub id: i64,
    /// Identifier of the home team.
    pub home_team_id: i64,
    /// Identifier of the away team.
    pub away_team_id: i64,
    /// Home score, null until first recorded.
    pub home_score: Option<i64>,
    /// Away score, null until first recorded.
    pub away_score: Option<i64>,
    /// Scheduled kickoff time.
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_at: OffsetDateTime,
    /// Pitch / field label the game is played on.
    pub field: String,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Current half of play (1 or 2).
    pub half: i64,
    /// Seconds left on the clock for the current half. Never negative.
    pub time_remaining: i64,
    /// Whether the countdown is live. True only while `status` is in-progress.
    pub timer_running: bool,
    /// Optional referee label (often the name of a resting team).
    pub referee: Option<String>,
}

/// Section of the tournament rules document a rule entry belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RuleSection {
    /// Rules governing the throw-off restart.
    ThrowOff,
    /// Special plays and their rulings.
    SpecialPlays,
    /// Everything else worth pinning to the rules page.
    GeneralNotes,
}

/// A single entry on the tournament rules page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleEntity {
    /// Stable identifier assigned by the store.
    pub id: i64,
    /// Short heading for the rule.
    pub title: String,
    /// Rule body text.
    pub content: String,
    /// Page section this rule is rendered under.
    pub section: RuleSection,
    /// Ordering key within the section.
    pub order_index: i64,
}

/// Team fields supplied on creation, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewTeam {
    /// Display name of the team.
    pub name: String,
    /// Hex display color (`#rrggbb`).
    pub color: String,
    /// Optional logo URL.
    pub logo: Option<String>,
}

/// Game fields supplied on creation, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewGame {
    /// Identifier of the home team.
    pub home_team_id: i64,
    /// Identifier of the away team.
    pub away_team_id: i64,
    /// Scheduled kickoff time.
    pub scheduled_at: OffsetDateTime,
    /// Pitch / field label.
    pub field: String,
    /// Optional referee label.
    pub referee: Option<String>,
    /// Initial countdown value, usually [`DEFAULT_HALF_SECONDS`].
    pub time_remaining: i64,
}

/// Rule fields supplied on creation, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewRule {
    /// Short heading for the rule.
    pub title: String,
    /// Rule body text.
    pub content: String,
    /// Page section this rule is rendered under.
    pub section: RuleSection,
    /// Ordering key within the section.
    pub order_index: i64,
}

impl NewTeam {
    /// Materialize a full entity with a freshly assigned id and zeroed totals.
    pub fn into_entity(self, id: i64) -> TeamEntity {
        TeamEntity {
            id,
            name: self.name,
            color: self.color,
            logo: self.logo,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
        }
    }
}

impl NewGame {
    /// Materialize a full entity with a freshly assigned id and a fresh clock.
    pub fn into_entity(self, id: i64) -> GameEntity {
        GameEntity {
            id,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            home_score: None,
            away_score: None,
            scheduled_at: self.scheduled_at,
            field: self.field,
            status: GameStatus::Scheduled,
            half: 1,
            time_remaining: self.time_remaining.max(0),
            timer_running: false,
            referee: self.referee,
        }
    }
}

impl NewRule {
    /// Materialize a full entity with a freshly assigned id.
    pub fn into_entity(self, id: i64) -> RuleEntity {
        RuleEntity {
            id,
            title: self.title,
            content: self.content,
            section: self.section,
            order_index: self.order_index,
        }
    }
}

/// Field-wise patch applied to a stored team. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TeamPatch {
    /// New display name.
    pub name: Option<String>,
    /// New display color.
    pub color: Option<String>,
    /// New logo URL (`Some(None)` clears it).
    pub logo: Option<Option<String>>,
    /// New win total.
    pub wins: Option<i64>,
    /// New loss total.
    pub losses: Option<i64>,
    /// New points-for total.
    pub points_for: Option<i64>,
    /// New points-against total.
    pub points_against: Option<i64>,
}

/// Field-wise patch applied to a stored game. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct GamePatch {
    /// New home score.
    pub home_score: Option<i64>,
    /// New away score.
    pub away_score: Option<i64>,
    /// New lifecycle status.
    pub status: Option<GameStatus>,
    /// New half number.
    pub half: Option<i64>,
    /// New countdown value in seconds.
    pub time_remaining: Option<i64>,
    /// New running flag for the clock.
    pub timer_running: Option<bool>,
    /// New referee label (`Some(None)` clears it).
    pub referee: Option<Option<String>>,
    /// New kickoff time.
    pub scheduled_at: Option<OffsetDateTime>,
    /// New field label.
    pub field: Option<String>,
}

/// Field-wise patch applied to a stored rule. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct RulePatch {
    /// New heading.
    pub title: Option<String>,
    /// New body text.
    pub content: Option<String>,
    /// New page section.
    pub section: Option<RuleSection>,
    /// New ordering key.
    pub order_index: Option<i64>,
}

impl TeamEntity {
    /// Apply a patch in place.
    pub fn apply(&mut self, patch: TeamPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
        if let Some(wins) = patch.wins {
            self.wins = wins;
        }
        if let Some(losses) = patch.losses {
            self.losses = losses;
        }
        if let Some(points_for) = patch.points_for {
            self.points_for = points_for;
        }
        if let Some(points_against) = patch.points_against {
            self.points_against = points_against;
        }
    }
}

impl GameEntity {
    /// Apply a patch in place.
    pub fn apply(&mut self, patch: GamePatch) {
        if let Some(home_score) = patch.home_score {
            self.home_score = Some(home_score);
        }
        if let Some(away_score) = patch.away_score {
            self.away_score = Some(away_score);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(half) = patch.half {
            self.half = half;
        }
        if let Some(time_remaining) = patch.time_remaining {
            self.time_remaining = time_remaining.max(0);
        }
        if let Some(timer_running) = patch.timer_running {
            self.timer_running = timer_running;
        }
        if let Some(referee) = patch.referee {
            self.referee = referee;
        }
        if let Some(scheduled_at) = patch.scheduled_at {
            self.scheduled_at = scheduled_at;
        }
        if let Some(field) = patch.field {
            self.field = field;
        }
    }
}

impl RuleEntity {
    /// Apply a patch in place.
    pub fn apply(&mut self, patch: RulePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(section) = patch.section {
            self.section = section;
        }
        if let Some(order_index) = patch.order_index {
            self.order_index = order_index;
        }
    }
}

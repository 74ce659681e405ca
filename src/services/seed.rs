//! Sample tournament bootstrap: a four-team, single-pitch round robin with
//! the default rules page. Used to get a fresh deployment rendering
//! something before the operator takes over.

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::info;

use crate::{
    dao::models::{NewGame, NewRule, NewTeam, RuleSection},
    dto::admin::SeedResponse,
    error::ServiceError,
    state::SharedState,
};

struct SampleGame {
    home: usize,
    away: usize,
    kickoff: &'static str,
    referee: &'static str,
}

const SAMPLE_TEAMS: [(&str, &str); 4] = [
    ("Margate Krakens", "#d80e61"),
    ("Exiles Black", "#000000"),
    ("Exiles Silver", "#c0c0c0"),
    ("Solent Red Storm", "#dc2626"),
];

/// Round robin on one pitch; the resting team referees.
const SAMPLE_GAMES: [SampleGame; 6] = [
    SampleGame {
        home: 0,
        away: 1,
        kickoff: "2025-10-11T10:00:00+01:00",
        referee: "Solent Red Storm",
    },
    SampleGame {
        home: 3,
        away: 2,
        kickoff: "2025-10-11T10:40:00+01:00",
        referee: "Margate Krakens",
    },
    SampleGame {
        home: 0,
        away: 2,
        kickoff: "2025-10-11T11:40:00+01:00",
        referee: "Solent Red Storm",
    },
    SampleGame {
        home: 1,
        away: 3,
        kickoff: "2025-10-11T12:20:00+01:00",
        referee: "Margate Krakens",
    },
    SampleGame {
        home: 1,
        away: 2,
        kickoff: "2025-10-11T13:20:00+01:00",
        referee: "Margate Krakens (neutral)",
    },
    SampleGame {
        home: 0,
        away: 3,
        kickoff: "2025-10-11T14:00:00+01:00",
        referee: "Exiles Black",
    },
];

const SAMPLE_RULES: [(&str, &str, RuleSection); 3] = [
    (
        "Throw Off Rules",
        "At the start of each half, the receiving team returns a 3-on-1 throw \
         off: one returner in their own endzone, the thrower at halfway, and \
         two defenders on their own goal line. The throw must travel at least \
         10 yards; wherever the returner is downed is where the drive starts.",
        RuleSection::ThrowOff,
    ),
    (
        "Special Plays",
        "QB RUN: any team can run their QB directly from snap once per half. \
         BULLET BLITZ: any team can blitz from anywhere once per half. Both \
         are noted on the scoresheet by the refereeing team.",
        RuleSection::SpecialPlays,
    ),
    (
        "General Notes",
        "All standard flag football rules apply. Referees track special \
         plays on the scoresheet. Penalties during throw offs follow the \
         standard penalty rules.",
        RuleSection::GeneralNotes,
    ),
];

/// Populate an empty store with the sample tournament.
///
/// Refuses to run when any team already exists, so a stray call cannot
/// mix sample fixtures into live data.
pub async fn seed_sample_data(state: &SharedState) -> Result<SeedResponse, ServiceError> {
    let store = state.store();

    if !store.list_teams().await?.is_empty() {
        return Err(ServiceError::InvalidState(
            "store already contains teams; reset before seeding".into(),
        ));
    }

    let mut team_ids = Vec::with_capacity(SAMPLE_TEAMS.len());
    for (name, color) in SAMPLE_TEAMS {
        let team = store
            .create_team(NewTeam {
                name: name.into(),
                color: color.into(),
                logo: None,
            })
            .await?;
        team_ids.push(team.id);
    }

    let mut games_created = 0;
    for game in &SAMPLE_GAMES {
        let scheduled_at = OffsetDateTime::parse(game.kickoff, &Rfc3339)
            .map_err(|err| ServiceError::InvalidState(format!("bad sample kickoff: {err}")))?;
        store
            .create_game(NewGame {
                home_team_id: team_ids[game.home],
                away_team_id: team_ids[game.away],
                scheduled_at,
                field: "1".into(),
                referee: Some(game.referee.into()),
                time_remaining: state.config().half_seconds,
            })
            .await?;
        games_created += 1;
    }

    let mut rules_created = 0;
    for (index, (title, content, section)) in SAMPLE_RULES.iter().enumerate() {
        store
            .create_rule(NewRule {
                title: (*title).into(),
                content: (*content).into(),
                section: *section,
                order_index: (index + 1) as i64,
            })
            .await?;
        rules_created += 1;
    }

    info!(
        teams = team_ids.len(),
        games = games_created,
        rules = rules_created,
        "sample tournament seeded"
    );
    Ok(SeedResponse {
        teams_created: team_ids.len(),
        games_created,
        rules_created,
    })
}

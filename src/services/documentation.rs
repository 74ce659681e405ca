use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the tournament scoreboard backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::teams::list_teams,
        crate::routes::teams::get_team,
        crate::routes::teams::standings,
        crate::routes::teams::create_team,
        crate::routes::teams::update_team,
        crate::routes::teams::delete_team,
        crate::routes::games::list_games,
        crate::routes::games::get_game,
        crate::routes::games::create_game,
        crate::routes::games::update_game,
        crate::routes::games::delete_game,
        crate::routes::rules::list_rules,
        crate::routes::rules::create_rule,
        crate::routes::rules::update_rule,
        crate::routes::rules::delete_rule,
        crate::routes::admin::recalculate_standings,
        crate::routes::admin::init_timers,
        crate::routes::admin::reset,
        crate::routes::admin::seed_sample_data,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::team::CreateTeamRequest,
            crate::dto::team::UpdateTeamRequest,
            crate::dto::team::TeamResponse,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::UpdateGameRequest,
            crate::dto::game::GameResponse,
            crate::dto::rule::CreateRuleRequest,
            crate::dto::rule::UpdateRuleRequest,
            crate::dto::rule::RuleResponse,
            crate::dto::admin::ActionResponse,
            crate::dto::admin::InitTimersResponse,
            crate::dto::admin::SeedResponse,
            crate::services::standings::RecalculateOutcome,
            crate::dao::models::GameStatus,
            crate::dao::models::RuleSection,
        )
    ),
    tags(
        (name = "teams", description = "Team registry and standings"),
        (name = "games", description = "Schedule, live scores, and the game clock"),
        (name = "rules", description = "Tournament rules page"),
        (name = "admin", description = "Repair and bootstrap operations"),
    )
)]
pub struct ApiDoc;

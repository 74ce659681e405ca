use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    dto::rule::{CreateRuleRequest, RuleResponse, UpdateRuleRequest},
    error::AppError,
    services::rule_service,
    state::SharedState,
};

/// Read-only rules route consumed by the rules page.
pub fn public_router() -> Router<SharedState> {
    Router::new().route("/api/rules", get(list_rules))
}

/// Mutating rules routes, mounted behind the admin password middleware.
pub fn admin_router() -> Router<SharedState> {
    Router::new()
        .route("/api/rules", post(create_rule))
        .route("/api/rules/{id}", put(update_rule).delete(delete_rule))
}

/// List rules in page order.
#[utoipa::path(
    get,
    path = "/api/rules",
    tag = "rules",
    responses((status = 200, description = "All rules in page order", body = [RuleResponse]))
)]
pub async fn list_rules(
    State(state): State<SharedState>,
) -> Result<Json<Vec<RuleResponse>>, AppError> {
    Ok(Json(rule_service::list_rules(&state).await?))
}

/// Add a rule entry.
#[utoipa::path(
    post,
    path = "/api/rules",
    tag = "rules",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password")),
    request_body = CreateRuleRequest,
    responses((status = 200, description = "Rule created", body = RuleResponse))
)]
pub async fn create_rule(
    State(state): State<SharedState>,
    Json(payload): Json<CreateRuleRequest>,
) -> Result<Json<RuleResponse>, AppError> {
    payload.validate()?;
    Ok(Json(rule_service::create_rule(&state, payload).await?))
}

/// Edit a rule entry.
#[utoipa::path(
    put,
    path = "/api/rules/{id}",
    tag = "rules",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password"),
    ("id" = i64, Path, description = "Identifier of the rule")),
    request_body = UpdateRuleRequest,
    responses(
        (status = 200, description = "Rule updated", body = RuleResponse),
        (status = 404, description = "Unknown rule")
    )
)]
pub async fn update_rule(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRuleRequest>,
) -> Result<Json<RuleResponse>, AppError> {
    payload.validate()?;
    Ok(Json(rule_service::update_rule(&state, id, payload).await?))
}

/// Delete a rule entry.
#[utoipa::path(
    delete,
    path = "/api/rules/{id}",
    tag = "rules",
    params(("X-Admin-Password" = String, Header, description = "Shared admin password"),
    ("id" = i64, Path, description = "Identifier of the rule")),
    responses(
        (status = 204, description = "Rule deleted"),
        (status = 404, description = "Unknown rule")
    )
)]
pub async fn delete_rule(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    rule_service::delete_rule(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

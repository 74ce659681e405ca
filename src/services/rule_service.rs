use crate::{
    dao::models::{NewRule, RulePatch, RuleSection},
    dto::rule::{CreateRuleRequest, RuleResponse, UpdateRuleRequest},
    error::ServiceError,
    state::SharedState,
};

/// Rendering order of the rules page sections.
fn section_rank(section: RuleSection) -> u8 {
    match section {
        RuleSection::ThrowOff => 0,
        RuleSection::SpecialPlays => 1,
        RuleSection::GeneralNotes => 2,
    }
}

/// List rules in page order: by section, then by the ordering key.
pub async fn list_rules(state: &SharedState) -> Result<Vec<RuleResponse>, ServiceError> {
    let mut rules = state.store().list_rules().await?;
    rules.sort_by_key(|rule| (section_rank(rule.section), rule.order_index, rule.id));
    Ok(rules.into_iter().map(Into::into).collect())
}

/// Add a rule entry.
pub async fn create_rule(
    state: &SharedState,
    request: CreateRuleRequest,
) -> Result<RuleResponse, ServiceError> {
    let rule = state
        .store()
        .create_rule(NewRule {
            title: request.title,
            content: request.content,
            section: request.section,
            order_index: request.order_index,
        })
        .await?;
    Ok(rule.into())
}

/// Edit a rule entry.
pub async fn update_rule(
    state: &SharedState,
    id: i64,
    request: UpdateRuleRequest,
) -> Result<RuleResponse, ServiceError> {
    let patch = RulePatch {
        title: request.title,
        content: request.content,
        section: request.section,
        order_index: request.order_index,
    };

    let Some(rule) = state.store().update_rule(id, patch).await? else {
        return Err(ServiceError::NotFound(format!("rule `{id}` not found")));
    };
    Ok(rule.into())
}

/// Delete a rule entry.
pub async fn delete_rule(state: &SharedState, id: i64) -> Result<(), ServiceError> {
    if !state.store().delete_rule(id).await? {
        return Err(ServiceError::NotFound(format!("rule `{id}` not found")));
    }
    Ok(())
}

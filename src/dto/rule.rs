//! DTO definitions for the tournament rules page.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::models::{RuleEntity, RuleSection};

/// Payload to add a rule entry.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleRequest {
    /// Short heading.
    #[validate(length(min = 1, max = 128))]
    pub title: String,
    /// Rule body text.
    #[validate(length(min = 1))]
    pub content: String,
    /// Page section this rule belongs to.
    pub section: RuleSection,
    /// Ordering key within the section.
    pub order_index: i64,
}

/// Payload to edit a rule entry. Absent fields stay untouched.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleRequest {
    /// New heading.
    #[validate(length(min = 1, max = 128))]
    pub title: Option<String>,
    /// New body text.
    #[validate(length(min = 1))]
    pub content: Option<String>,
    /// New page section.
    pub section: Option<RuleSection>,
    /// New ordering key.
    pub order_index: Option<i64>,
}

/// A rule entry as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleResponse {
    /// Stable identifier.
    pub id: i64,
    /// Short heading.
    pub title: String,
    /// Rule body text.
    pub content: String,
    /// Page section.
    pub section: RuleSection,
    /// Ordering key within the section.
    pub order_index: i64,
}

impl From<RuleEntity> for RuleResponse {
    fn from(rule: RuleEntity) -> Self {
        Self {
            id: rule.id,
            title: rule.title,
            content: rule.content,
            section: rule.section,
            order_index: rule.order_index,
        }
    }
}

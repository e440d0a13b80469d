//! Goal area model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use momentum_core::goal_area::GoalAreaId;
use momentum_core::types::{Timestamp, UserId};

/// A row from the `goal_areas` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GoalArea {
    pub id: GoalAreaId,
    pub user_id: UserId,
    pub display_name: String,
    pub emoji: String,
    pub color: String,
    pub weekly_min_wins: i32,
    pub intention_text: Option<String>,
    pub flexibility_budget: i32,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Partial update for a goal area. Absent fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalArea {
    #[validate(length(min = 1, max = 100))]
    pub display_name: Option<String>,
    #[validate(length(max = 10))]
    pub emoji: Option<String>,
    #[validate(range(min = 0, max = 20))]
    pub weekly_min_wins: Option<i32>,
    pub intention_text: Option<String>,
    #[validate(range(min = 0))]
    pub flexibility_budget: Option<i32>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

//! Repository for the `goal_areas` table.

use sqlx::PgPool;

use momentum_core::goal_area::GoalAreaId;
use momentum_core::types::UserId;

use crate::models::goal_area::{GoalArea, UpdateGoalArea};

/// Column list for goal_areas queries.
const COLUMNS: &str = "id, user_id, display_name, emoji, color, weekly_min_wins, intention_text, \
                       flexibility_budget, is_active, sort_order, created_at, updated_at";

/// Provides goal area queries, scoped to one user.
pub struct GoalAreaRepo;

impl GoalAreaRepo {
    /// Insert the registry defaults for a user, skipping areas that already
    /// exist. Safe to call on every read; concurrent callers race benignly.
    pub async fn ensure_defaults(pool: &PgPool, user_id: UserId) -> Result<(), sqlx::Error> {
        for area in GoalAreaId::ALL {
            let defaults = area.seed_defaults();
            sqlx::query(
                "INSERT INTO goal_areas
                     (user_id, id, display_name, emoji, color, weekly_min_wins,
                      intention_text, sort_order)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                 ON CONFLICT (user_id, id) DO NOTHING",
            )
            .bind(user_id)
            .bind(area)
            .bind(defaults.display_name)
            .bind(defaults.emoji)
            .bind(defaults.color)
            .bind(defaults.weekly_min_wins)
            .bind(defaults.intention_text)
            .bind(defaults.sort_order)
            .execute(pool)
            .await?;
        }
        Ok(())
    }

    /// List a user's goal areas in sort order.
    pub async fn list_for_user(pool: &PgPool, user_id: UserId) -> Result<Vec<GoalArea>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM goal_areas WHERE user_id = $1 ORDER BY sort_order ASC"
        );
        sqlx::query_as::<_, GoalArea>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update one of a user's goal areas, returning the updated
    /// row, or `None` if the user has no such area.
    pub async fn update(
        pool: &PgPool,
        user_id: UserId,
        id: GoalAreaId,
        input: &UpdateGoalArea,
    ) -> Result<Option<GoalArea>, sqlx::Error> {
        let query = format!(
            "UPDATE goal_areas SET
                display_name = COALESCE($3, display_name),
                emoji = COALESCE($4, emoji),
                weekly_min_wins = COALESCE($5, weekly_min_wins),
                intention_text = COALESCE($6, intention_text),
                flexibility_budget = COALESCE($7, flexibility_budget),
                is_active = COALESCE($8, is_active),
                sort_order = COALESCE($9, sort_order),
                updated_at = NOW()
             WHERE user_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GoalArea>(&query)
            .bind(user_id)
            .bind(id)
            .bind(&input.display_name)
            .bind(&input.emoji)
            .bind(input.weekly_min_wins)
            .bind(&input.intention_text)
            .bind(input.flexibility_budget)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }
}

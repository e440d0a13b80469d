//! Repository for the `wins` table.

use sqlx::PgPool;

use momentum_core::goal_area::GoalAreaId;
use momentum_core::types::{UserId, WinId};
use momentum_core::week::WeekWindow;

use crate::models::win::{CreateWin, Win};

/// Column list for wins queries.
const COLUMNS: &str = "id, user_id, goal_area_id, title, description, duration, energy_boost, \
                       occurred_at, captured_at, capture_method, voice_transcript, is_archived, \
                       created_at";

/// Default page size for the vault listing.
pub const DEFAULT_PAGE_SIZE: i64 = 50;
/// Upper bound on a requested page size.
pub const MAX_PAGE_SIZE: i64 = 200;

/// Clamp a requested limit into 1..=[`MAX_PAGE_SIZE`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Provides win queries, scoped to one user.
pub struct WinRepo;

impl WinRepo {
    /// Insert a win, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        input: &CreateWin,
    ) -> Result<Win, sqlx::Error> {
        let query = format!(
            "INSERT INTO wins
                 (user_id, goal_area_id, title, description, duration, energy_boost,
                  occurred_at, capture_method, voice_transcript)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Win>(&query)
            .bind(user_id)
            .bind(input.goal_area_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration)
            .bind(input.energy_boost)
            .bind(input.occurred_at)
            .bind(input.capture_method)
            .bind(&input.voice_transcript)
            .fetch_one(pool)
            .await
    }

    /// Non-archived wins inside the week window, newest first. The window
    /// start is inclusive and the end exclusive.
    pub async fn list_weekly(
        pool: &PgPool,
        user_id: UserId,
        window: &WeekWindow,
    ) -> Result<Vec<Win>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wins
             WHERE user_id = $1 AND is_archived = FALSE
               AND occurred_at >= $2 AND occurred_at < $3
             ORDER BY occurred_at DESC"
        );
        sqlx::query_as::<_, Win>(&query)
            .bind(user_id)
            .bind(window.week_start)
            .bind(window.week_end)
            .fetch_all(pool)
            .await
    }

    /// Paginated non-archived wins, newest first.
    pub async fn list_vault(
        pool: &PgPool,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Win>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wins
             WHERE user_id = $1 AND is_archived = FALSE
             ORDER BY occurred_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Win>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Non-archived wins, newest first, optionally filtered to one area.
    pub async fn list_by_goal_area(
        pool: &PgPool,
        user_id: UserId,
        goal_area_id: Option<GoalAreaId>,
    ) -> Result<Vec<Win>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wins
             WHERE user_id = $1 AND is_archived = FALSE
               AND ($2::goal_area_id IS NULL OR goal_area_id = $2)
             ORDER BY occurred_at DESC"
        );
        sqlx::query_as::<_, Win>(&query)
            .bind(user_id)
            .bind(goal_area_id)
            .fetch_all(pool)
            .await
    }

    /// Per-area counts of non-archived wins inside the week window.
    /// Areas without wins are absent from the result.
    pub async fn weekly_counts(
        pool: &PgPool,
        user_id: UserId,
        window: &WeekWindow,
    ) -> Result<Vec<(GoalAreaId, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (GoalAreaId, i64)>(
            "SELECT goal_area_id, COUNT(*) FROM wins
             WHERE user_id = $1 AND is_archived = FALSE
               AND occurred_at >= $2 AND occurred_at < $3
             GROUP BY goal_area_id",
        )
        .bind(user_id)
        .bind(window.week_start)
        .bind(window.week_end)
        .fetch_all(pool)
        .await
    }

    /// Archive a win, returning the updated row, or `None` if the user has
    /// no such win. Archival is the only permitted mutation of a win.
    pub async fn archive(
        pool: &PgPool,
        user_id: UserId,
        win_id: WinId,
    ) -> Result<Option<Win>, sqlx::Error> {
        let query = format!(
            "UPDATE wins SET is_archived = TRUE
             WHERE user_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Win>(&query)
            .bind(user_id)
            .bind(win_id)
            .fetch_optional(pool)
            .await
    }
}

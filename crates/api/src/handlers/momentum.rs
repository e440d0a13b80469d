//! Handler for the derived momentum snapshot.

use std::collections::HashMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use momentum_core::goal_area::GoalAreaId;
use momentum_core::momentum::{self, MomentumLevel, Trend};
use momentum_core::types::Timestamp;
use momentum_core::week;
use momentum_db::repositories::{GoalAreaRepo, WinRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Momentum for one goal area.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAreaMomentum {
    pub goal_area_id: GoalAreaId,
    pub display_name: String,
    pub emoji: String,
    pub color: String,
    pub current_week_wins: u32,
    pub weekly_target: u32,
    pub streak: u32,
    pub momentum_score: u32,
    pub momentum_level: &'static MomentumLevel,
    pub trend: Trend,
}

/// Overall momentum across all areas.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallMomentum {
    pub score: u32,
    pub level: &'static MomentumLevel,
}

/// The full snapshot: derived on demand, never persisted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumSnapshot {
    pub overall: OverallMomentum,
    pub by_goal_area: Vec<GoalAreaMomentum>,
    pub week_start: Timestamp,
    pub week_end: Timestamp,
}

/// GET /momentum
///
/// Compute the momentum snapshot from this week's win counts. A user
/// without goal areas gets an empty breakdown and an overall score of 0.
pub async fn snapshot(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let window = week::current_week_window();

    let areas = GoalAreaRepo::list_for_user(&state.pool, auth.user_id).await?;
    let counts: HashMap<GoalAreaId, i64> =
        WinRepo::weekly_counts(&state.pool, auth.user_id, &window)
            .await?
            .into_iter()
            .collect();

    let by_goal_area: Vec<GoalAreaMomentum> = areas
        .into_iter()
        .map(|area| {
            let current_week_wins = counts.get(&area.id).copied().unwrap_or(0) as u32;
            let weekly_target = area.weekly_min_wins.max(0) as u32;
            let streak = momentum::streak_weeks();
            let momentum_score = momentum::momentum_score(current_week_wins, weekly_target, streak);

            GoalAreaMomentum {
                goal_area_id: area.id,
                display_name: area.display_name,
                emoji: area.emoji,
                color: area.color,
                current_week_wins,
                weekly_target,
                streak,
                momentum_score,
                momentum_level: momentum::level_for_score(momentum_score),
                trend: momentum::classify_trend(current_week_wins, weekly_target),
            }
        })
        .collect();

    let scores: Vec<u32> = by_goal_area.iter().map(|m| m.momentum_score).collect();
    let overall_score = momentum::overall_score(&scores);

    let snapshot = MomentumSnapshot {
        overall: OverallMomentum {
            score: overall_score,
            level: momentum::level_for_score(overall_score),
        },
        by_goal_area,
        week_start: window.week_start,
        week_end: window.week_end,
    };

    Ok(Json(ApiResponse::ok(snapshot)))
}

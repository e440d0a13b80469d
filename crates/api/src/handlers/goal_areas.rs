//! Handlers for goal area configuration.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use momentum_core::error::CoreError;
use momentum_core::goal_area::GoalAreaId;
use momentum_db::models::goal_area::UpdateGoalArea;
use momentum_db::repositories::GoalAreaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /goal-areas
///
/// The user's goal areas in sort order. First access provisions the seven
/// registry defaults.
pub async fn list_goal_areas(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    GoalAreaRepo::ensure_defaults(&state.pool, auth.user_id).await?;
    let areas = GoalAreaRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(ApiResponse::ok(areas)))
}

/// PATCH /goal-areas/{id}
///
/// Partially update one goal area. Absent fields keep their value.
pub async fn update_goal_area(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<GoalAreaId>,
    Json(input): Json<UpdateGoalArea>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let area = GoalAreaRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "GoalArea",
                id: id.to_string(),
            })
        })?;

    tracing::info!(user_id = %auth.user_id, goal_area = %id, "Goal area updated");

    Ok(Json(ApiResponse::ok(area)))
}

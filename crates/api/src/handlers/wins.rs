//! Handlers for logging and listing wins.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use momentum_core::error::CoreError;
use momentum_core::types::WinId;
use momentum_core::week;
use momentum_db::models::win::CreateWin;
use momentum_db::repositories::win_repo::{clamp_limit, clamp_offset};
use momentum_db::repositories::WinRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{PaginationParams, WinLogParams};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /wins
///
/// Log a win. Wins are immutable after creation except archival.
pub async fn create_win(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWin>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let win = WinRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = %auth.user_id,
        win_id = %win.id,
        goal_area = %win.goal_area_id,
        "Win logged"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(win))))
}

/// GET /wins/weekly
///
/// Wins inside the current week window, newest first.
pub async fn list_weekly(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let window = week::current_week_window();
    let wins = WinRepo::list_weekly(&state.pool, auth.user_id, &window).await?;
    Ok(Json(ApiResponse::ok(wins)))
}

/// GET /wins/vault?limit=&offset=
///
/// Paginated non-archived wins, newest first.
pub async fn list_vault(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let wins = WinRepo::list_vault(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(ApiResponse::ok(wins)))
}

/// GET /wins/log?goalAreaId=
///
/// All non-archived wins, optionally filtered to one goal area.
pub async fn list_log(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<WinLogParams>,
) -> AppResult<impl IntoResponse> {
    let wins = WinRepo::list_by_goal_area(&state.pool, auth.user_id, params.goal_area_id).await?;
    Ok(Json(ApiResponse::ok(wins)))
}

/// POST /wins/{id}/archive
///
/// Archive a win, removing it from every listing.
pub async fn archive_win(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(win_id): Path<WinId>,
) -> AppResult<impl IntoResponse> {
    let win = WinRepo::archive(&state.pool, auth.user_id, win_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Win",
                id: win_id.to_string(),
            })
        })?;

    tracing::info!(user_id = %auth.user_id, win_id = %win.id, "Win archived");

    Ok(Json(ApiResponse::ok(win)))
}

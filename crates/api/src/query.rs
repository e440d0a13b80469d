//! Shared query parameter types for API handlers.

use serde::Deserialize;

use momentum_core::goal_area::GoalAreaId;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the repository layer via `clamp_limit` /
/// `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for the wins log (`?goalAreaId=`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinLogParams {
    pub goal_area_id: Option<GoalAreaId>,
}

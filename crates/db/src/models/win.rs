//! Win model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use momentum_core::goal_area::GoalAreaId;
use momentum_core::types::{Timestamp, UserId, WinId};

/// How a win was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "capture_method", rename_all = "snake_case")]
pub enum CaptureMethod {
    Voice,
    Tap,
    #[default]
    Manual,
    Import,
}

/// A row from the `wins` table. Immutable after insert except archival.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Win {
    pub id: WinId,
    pub user_id: UserId,
    pub goal_area_id: GoalAreaId,
    pub title: String,
    pub description: Option<String>,
    /// Minutes spent, when the user logged one.
    pub duration: Option<i32>,
    /// Self-reported energy boost, 1..=5.
    pub energy_boost: Option<i32>,
    /// When the accomplishment happened.
    pub occurred_at: Timestamp,
    /// When it was logged.
    pub captured_at: Timestamp,
    pub capture_method: CaptureMethod,
    pub voice_transcript: Option<String>,
    pub is_archived: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a win.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWin {
    pub goal_area_id: GoalAreaId,
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub duration: Option<i32>,
    #[validate(range(min = 1, max = 5))]
    pub energy_boost: Option<i32>,
    pub occurred_at: Timestamp,
    #[serde(default)]
    pub capture_method: CaptureMethod,
    pub voice_transcript: Option<String>,
}

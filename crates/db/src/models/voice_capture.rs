//! Voice capture model: one row per processed audio upload.

use serde::Serialize;
use sqlx::FromRow;

use momentum_core::types::{Timestamp, UserId};

/// Processing status for a completed capture.
pub const STATUS_COMPLETED: &str = "completed";

/// A row from the `voice_captures` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCapture {
    pub id: uuid::Uuid,
    pub user_id: UserId,
    pub transcript: String,
    /// The candidate wins offered to the user, as serialized JSON.
    pub extracted_wins: Option<serde_json::Value>,
    pub processing_status: String,
    pub created_at: Timestamp,
}

//! Repository for the `voice_captures` table.

use sqlx::PgPool;

use momentum_core::types::UserId;

use crate::models::voice_capture::VoiceCapture;

/// Column list for voice_captures queries.
const COLUMNS: &str = "id, user_id, transcript, extracted_wins, processing_status, created_at";

/// Provides voice capture persistence.
pub struct VoiceCaptureRepo;

impl VoiceCaptureRepo {
    /// Record a processed capture, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        transcript: &str,
        extracted_wins: &serde_json::Value,
        processing_status: &str,
    ) -> Result<VoiceCapture, sqlx::Error> {
        let query = format!(
            "INSERT INTO voice_captures (user_id, transcript, extracted_wins, processing_status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VoiceCapture>(&query)
            .bind(user_id)
            .bind(transcript)
            .bind(extracted_wins)
            .bind(processing_status)
            .fetch_one(pool)
            .await
    }

    /// A user's captures, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: UserId,
        limit: i64,
    ) -> Result<Vec<VoiceCapture>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM voice_captures
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, VoiceCapture>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

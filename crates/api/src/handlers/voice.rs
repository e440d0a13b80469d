//! Handlers for the voice capture pipeline.
//!
//! One upload is handled fully synchronously by the requesting
//! connection: transcribe, extract, persist the capture, reply. The body
//! limit on the voice routes rejects oversized uploads before any of that
//! starts.

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use momentum_core::extraction::ExtractedWin;
use momentum_db::models::voice_capture::STATUS_COMPLETED;
use momentum_db::repositories::VoiceCaptureRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Multipart field name carrying the audio payload.
const AUDIO_FIELD: &str = "audio";

/// Fallback MIME type when the client omits one on the audio field.
const DEFAULT_AUDIO_MIME: &str = "application/octet-stream";

/// Reply for POST /voice/process.
#[derive(Debug, Serialize)]
pub struct VoiceProcessData {
    pub transcript: String,
    pub wins: Vec<ExtractedWin>,
}

/// Reply for POST /voice/transcribe-only.
#[derive(Debug, Serialize)]
pub struct TranscribeOnlyData {
    pub transcript: String,
}

/// POST /voice/process
///
/// Transcribe an audio upload and extract candidate wins. A blank
/// transcript short-circuits: extraction is not invoked and the reply
/// carries zero wins.
pub async fn process_audio(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let (audio, mime_type) = read_audio_field(&mut multipart).await?;

    let transcript = state.transcription.transcribe(audio, &mime_type).await?;

    if transcript.trim().is_empty() {
        return Ok(Json(ApiResponse::ok(VoiceProcessData {
            transcript: String::new(),
            wins: Vec::new(),
        })));
    }

    let wins = state.extractor.extract(&transcript).await;

    let extracted_json = serde_json::to_value(&wins)
        .map_err(|err| AppError::InternalError(format!("Failed to serialize wins: {err}")))?;
    VoiceCaptureRepo::create(
        &state.pool,
        auth.user_id,
        &transcript,
        &extracted_json,
        STATUS_COMPLETED,
    )
    .await?;

    tracing::info!(
        user_id = %auth.user_id,
        transcript_chars = transcript.chars().count(),
        win_count = wins.len(),
        "Voice capture processed"
    );

    Ok(Json(ApiResponse::ok(VoiceProcessData { transcript, wins })))
}

/// POST /voice/transcribe-only
///
/// Transcribe an audio upload without extraction.
pub async fn transcribe_only(
    _auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let (audio, mime_type) = read_audio_field(&mut multipart).await?;
    let transcript = state.transcription.transcribe(audio, &mime_type).await?;
    Ok(Json(ApiResponse::ok(TranscribeOnlyData { transcript })))
}

/// Pull the audio field out of a multipart upload.
async fn read_audio_field(multipart: &mut Multipart) -> AppResult<(Vec<u8>, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("Invalid multipart body: {err}")))?
    {
        if field.name() == Some(AUDIO_FIELD) {
            let mime_type = field
                .content_type()
                .unwrap_or(DEFAULT_AUDIO_MIME)
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|err| AppError::BadRequest(format!("Failed to read audio: {err}")))?;
            return Ok((data.to_vec(), mime_type));
        }
    }

    Err(AppError::BadRequest("No audio file provided".into()))
}

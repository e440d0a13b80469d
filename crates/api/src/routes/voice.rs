//! Route definitions for the voice capture pipeline.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::voice;
use crate::state::AppState;

/// Uploads larger than this are rejected before processing.
pub const MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;

/// Voice routes mounted at `/voice`.
///
/// ```text
/// POST /process            -> process_audio
/// POST /transcribe-only    -> transcribe_only
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/process", post(voice::process_audio))
        .route("/transcribe-only", post(voice::transcribe_only))
        .layer(DefaultBodyLimit::max(MAX_AUDIO_BYTES))
}

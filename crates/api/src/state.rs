use std::sync::Arc;

use momentum_voice::{TranscriptionClient, WinExtractor};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: momentum_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Speech-to-text client.
    pub transcription: Arc<TranscriptionClient>,
    /// Model-backed win extractor with keyword fallback.
    pub extractor: Arc<WinExtractor>,
}

//! Route modules and the top-level API router.

pub mod goal_areas;
pub mod health;
pub mod momentum;
pub mod voice;
pub mod wins;

use axum::Router;

use crate::state::AppState;

/// All API routes, mounted under `/api`.
///
/// ```text
/// /wins                      log a win (POST)
/// /wins/weekly               current week's wins (GET)
/// /wins/vault                paginated vault (GET)
/// /wins/log                  full log, optional area filter (GET)
/// /wins/{id}/archive         archive a win (POST)
///
/// /goal-areas                list, provisioning defaults (GET)
/// /goal-areas/{id}           partial update (PATCH)
///
/// /momentum                  derived momentum snapshot (GET)
///
/// /voice/process             transcribe + extract wins (POST, multipart)
/// /voice/transcribe-only     transcribe only (POST, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/wins", wins::router())
        .nest("/goal-areas", goal_areas::router())
        .nest("/momentum", momentum::router())
        .nest("/voice", voice::router())
}

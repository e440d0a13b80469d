//! Route definitions for wins.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::wins;
use crate::state::AppState;

/// Win routes mounted at `/wins`.
///
/// ```text
/// POST /                -> create_win
/// GET  /weekly          -> list_weekly
/// GET  /vault           -> list_vault
/// GET  /log             -> list_log
/// POST /{id}/archive    -> archive_win
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(wins::create_win))
        .route("/weekly", get(wins::list_weekly))
        .route("/vault", get(wins::list_vault))
        .route("/log", get(wins::list_log))
        .route("/{id}/archive", post(wins::archive_win))
}

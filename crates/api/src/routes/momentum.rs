//! Route definition for the momentum snapshot.

use axum::routing::get;
use axum::Router;

use crate::handlers::momentum;
use crate::state::AppState;

/// Momentum routes mounted at `/momentum`.
///
/// ```text
/// GET / -> snapshot
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(momentum::snapshot))
}

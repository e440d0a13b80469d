//! Route definitions for goal areas.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::goal_areas;
use crate::state::AppState;

/// Goal area routes mounted at `/goal-areas`.
///
/// ```text
/// GET   /        -> list_goal_areas
/// PATCH /{id}    -> update_goal_area
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(goal_areas::list_goal_areas))
        .route("/{id}", patch(goal_areas::update_goal_area))
}

//! `x-user-id` extractor for Axum handlers.
//!
//! There is no real authentication: every request carries the caller's
//! user id in a header, and its absence is a 401.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use momentum_core::error::CoreError;
use momentum_core::types::UserId;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The requesting user, extracted from the `x-user-id` header.
///
/// Use as an extractor parameter in any handler that operates on a user's
/// data:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User ID required".into())))?;

        let user_id = header.parse::<UserId>().map_err(|_| {
            AppError::Core(CoreError::Unauthorized(
                "x-user-id must be a valid UUID".into(),
            ))
        })?;

        Ok(AuthUser { user_id })
    }
}
